//! Property tests for Easter-relative rules.

use computus_holidays::{easter_sunday, DateRule, EasterRule, Reckoning};
use computus_time::{Date, Weekday};
use proptest::prelude::*;

fn reckoning() -> impl Strategy<Value = Reckoning> {
    prop_oneof![Just(Reckoning::Gregorian), Just(Reckoning::OrthodoxJulian)]
}

/// Dates between 1600 and 2400.
fn modern_date() -> impl Strategy<Value = Date> {
    let lo = Date::from_ymd(1600, 1, 1).unwrap().serial();
    let hi = Date::from_ymd(2400, 1, 1).unwrap().serial();
    (lo..hi).prop_map(|s| Date::from_serial(s).unwrap())
}

proptest! {
    #[test]
    fn easter_is_a_sunday(year in -100_000i32..100_000, r in reckoning()) {
        let e = easter_sunday(year, r).unwrap();
        prop_assert_eq!(e.weekday(), Weekday::Sunday);
    }

    #[test]
    fn first_after_is_earliest(
        start in modern_date(),
        offset in -400i64..400,
        r in reckoning(),
    ) {
        let rule = EasterRule::new(offset, r);
        let found = rule.first_after(start).unwrap();
        prop_assert!(found >= start);
        prop_assert!(rule.is_on(found));

        // No occurrence from any nearby Easter year sits in [start, found).
        let year = start.year();
        for y in (year - 3)..=(year + 3) {
            let occ = rule.occurrence_in_year(y).unwrap();
            prop_assert!(occ < start || occ >= found, "{} year {}: {:?}", rule, y, occ);
        }
    }

    #[test]
    fn first_between_is_half_open(
        start in modern_date(),
        offset in -60i64..70,
        r in reckoning(),
    ) {
        let rule = EasterRule::new(offset, r);
        let occ = rule.first_after(start).unwrap();
        prop_assert_eq!(rule.first_between(start, Some(occ)).unwrap(), None);
        prop_assert_eq!(rule.first_between(start, Some(occ + 1)).unwrap(), Some(occ));
        prop_assert_eq!(rule.first_between(start, None).unwrap(), Some(occ));
        prop_assert_eq!(rule.first_between(start, Some(start)).unwrap(), None);
    }

    #[test]
    fn is_on_only_the_day(year in 1600i32..2400, offset in -60i64..70, r in reckoning()) {
        let rule = EasterRule::new(offset, r);
        let occ = rule.occurrence_in_year(year).unwrap();
        prop_assert!(rule.is_on(occ));
        prop_assert!(!rule.is_on(occ - 1));
        prop_assert!(!rule.is_on(occ + 1));
    }

    #[test]
    fn queries_are_deterministic(start in modern_date(), offset in -100i64..100) {
        let a = EasterRule::western(offset).first_after(start).unwrap();
        let b = EasterRule::western(offset).first_after(start).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn reckonings_differ_in_2024() {
    let start = Date::from_ymd(2024, 1, 1).unwrap();
    let western = EasterRule::western(0).first_after(start).unwrap();
    let orthodox = EasterRule::orthodox(0).first_after(start).unwrap();
    assert_ne!(western, orthodox);
}
