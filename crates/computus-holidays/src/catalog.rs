//! The built-in catalog of Easter-relative holidays.
//!
//! Every entry is reckoned from Western Easter; use
//! [`EasterHoliday::reckoned`] for the Orthodox equivalent.  Some entries
//! share an offset (Pentecost and Whit Sunday, for instance) and are kept as
//! distinct names.

use crate::easter_rule::EasterRule;
use crate::holiday::EasterHoliday;

const fn holiday(days_after_easter: i64, name: &'static str) -> EasterHoliday {
    EasterHoliday::from_static(name, EasterRule::western(days_after_easter))
}

/// Septuagesima Sunday, nine weeks before Easter.
pub const SEPTUAGESIMA_SUNDAY: EasterHoliday = holiday(-63, "Septuagesima");
/// Sexagesima Sunday, eight weeks before Easter.
pub const SEXAGESIMA_SUNDAY: EasterHoliday = holiday(-56, "Sexagesima");
/// Shrove or Fat Thursday, start of Carnival.
pub const SHROVE_THURSDAY: EasterHoliday = holiday(-52, "Shrove Thursday");
/// Quinquagesima (Shrove) Sunday, also called Estomihi.
pub const QUINQUAGESIMA_SUNDAY: EasterHoliday = holiday(-49, "Quinquagesima");
/// Rose Monday (Shrove Monday).
pub const SHROVE_MONDAY: EasterHoliday = holiday(-48, "Rose Monday");
/// Shrove Tuesday, Mardi Gras.
pub const SHROVE_TUESDAY: EasterHoliday = holiday(-47, "Shrove Tuesday");
/// Ash Wednesday, start of Lent.
pub const ASH_WEDNESDAY: EasterHoliday = holiday(-46, "Ash Wednesday");
/// Invocabit, first Sunday of Lent.
pub const INVOCABIT_SUNDAY: EasterHoliday = holiday(-42, "Invocabit");
/// Reminiscere, second Sunday of Lent.
pub const REMINISCERE_SUNDAY: EasterHoliday = holiday(-35, "Reminiscere");
/// Oculi, third Sunday of Lent.
pub const OCULI_SUNDAY: EasterHoliday = holiday(-28, "Oculi");
/// Mothering Sunday, three weeks before Easter.
pub const MOTHERING_SUNDAY: EasterHoliday = holiday(-21, "Mothering Sunday");
/// Passion (Laetare) Sunday.
pub const PASSION_SUNDAY: EasterHoliday = holiday(-14, "Passion Sunday");
/// Palm Sunday.
pub const PALM_SUNDAY: EasterHoliday = holiday(-7, "Palm Sunday");
/// Holy Monday.
pub const HOLY_MONDAY: EasterHoliday = holiday(-6, "Holy Monday");
/// Holy Tuesday.
pub const HOLY_TUESDAY: EasterHoliday = holiday(-5, "Holy Tuesday");
/// Holy or Spy Wednesday.
pub const HOLY_WEDNESDAY: EasterHoliday = holiday(-4, "Holy Wednesday");
/// Maundy Thursday.
pub const MAUNDY_THURSDAY: EasterHoliday = holiday(-3, "Maundy Thursday");
/// Good Friday.
pub const GOOD_FRIDAY: EasterHoliday = holiday(-2, "Good Friday");
/// Holy Saturday.
pub const HOLY_SATURDAY: EasterHoliday = holiday(-1, "Holy Saturday");
/// Easter Sunday.
pub const EASTER_SUNDAY: EasterHoliday = holiday(0, "Easter Sunday");
/// Easter Monday.
pub const EASTER_MONDAY: EasterHoliday = holiday(1, "Easter Monday");
/// Divine Mercy Sunday, one week after Easter.
pub const DIVINE_MERCY_SUNDAY: EasterHoliday = holiday(7, "Divine Mercy");
/// Misericordias Domini, two weeks after Easter.
pub const MISERICORDIAS_SUNDAY: EasterHoliday = holiday(14, "Misericordias Domini");
/// Jubilate, three weeks after Easter.
pub const JUBILATE_SUNDAY: EasterHoliday = holiday(21, "Jubilate");
/// Cantate, four weeks after Easter.
pub const CANTATE_SUNDAY: EasterHoliday = holiday(28, "Cantate");
/// Vocem jucunditatis, five weeks after Easter.
pub const VOCEM_SUNDAY: EasterHoliday = holiday(35, "Vocem jucunditatis");
/// Ascension Thursday.
pub const ASCENSION: EasterHoliday = holiday(39, "Ascension");
/// Pentecost, also Whit or Exaudi Sunday.
pub const PENTECOST: EasterHoliday = holiday(49, "Pentecost");
/// Whit Sunday; same day as [`PENTECOST`].
pub const WHIT_SUNDAY: EasterHoliday = holiday(49, "Whit Sunday");
/// Whit Monday.
pub const WHIT_MONDAY: EasterHoliday = holiday(50, "Whit Monday");
/// Trinity Sunday.
///
/// Kept at +28 days, the offset this catalog has always used, so it
/// coincides with [`CANTATE_SUNDAY`].
pub const TRINITY_SUNDAY: EasterHoliday = holiday(28, "Trinity Sunday");
/// Corpus Christi.
pub const CORPUS_CHRISTI: EasterHoliday = holiday(60, "Corpus Christi");
/// Sacred Heart Friday.
pub const SACRED_HEART: EasterHoliday = holiday(68, "Sacred Heart");
/// Immaculate Heart Saturday.
pub const IMMACULATE_HEART: EasterHoliday = holiday(69, "Immaculate Heart");

/// Every catalog entry, in order of offset from Easter (as declared).
pub const ALL: &[EasterHoliday] = &[
    SEPTUAGESIMA_SUNDAY,
    SEXAGESIMA_SUNDAY,
    SHROVE_THURSDAY,
    QUINQUAGESIMA_SUNDAY,
    SHROVE_MONDAY,
    SHROVE_TUESDAY,
    ASH_WEDNESDAY,
    INVOCABIT_SUNDAY,
    REMINISCERE_SUNDAY,
    OCULI_SUNDAY,
    MOTHERING_SUNDAY,
    PASSION_SUNDAY,
    PALM_SUNDAY,
    HOLY_MONDAY,
    HOLY_TUESDAY,
    HOLY_WEDNESDAY,
    MAUNDY_THURSDAY,
    GOOD_FRIDAY,
    HOLY_SATURDAY,
    EASTER_SUNDAY,
    EASTER_MONDAY,
    DIVINE_MERCY_SUNDAY,
    MISERICORDIAS_SUNDAY,
    JUBILATE_SUNDAY,
    CANTATE_SUNDAY,
    VOCEM_SUNDAY,
    ASCENSION,
    PENTECOST,
    WHIT_SUNDAY,
    WHIT_MONDAY,
    TRINITY_SUNDAY,
    CORPUS_CHRISTI,
    SACRED_HEART,
    IMMACULATE_HEART,
];

/// Look up a catalog entry by name, ignoring ASCII case.
///
/// ```
/// use computus_holidays::catalog;
/// assert_eq!(catalog::by_name("good friday"), Some(&catalog::GOOD_FRIDAY));
/// assert!(catalog::by_name("Boxing Day").is_none());
/// ```
pub fn by_name(name: &str) -> Option<&'static EasterHoliday> {
    ALL.iter().find(|h| h.name().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_rule::DateRule;
    use computus_time::{Date, Weekday};
    use std::collections::HashSet;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn catalog_is_complete() {
        assert_eq!(ALL.len(), 34);
        let names: HashSet<_> = ALL.iter().map(|h| h.name()).collect();
        assert_eq!(names.len(), ALL.len(), "names must be unique");
    }

    #[test]
    fn shared_offsets_stay_distinct() {
        assert_eq!(PENTECOST.rule(), WHIT_SUNDAY.rule());
        assert_ne!(PENTECOST, WHIT_SUNDAY);
        assert_eq!(TRINITY_SUNDAY.rule(), CANTATE_SUNDAY.rule());
    }

    #[test]
    fn dates_in_2024() {
        let start = date(2024, 1, 1);
        let cases = [
            (&ASH_WEDNESDAY, date(2024, 2, 14)),
            (&PALM_SUNDAY, date(2024, 3, 24)),
            (&GOOD_FRIDAY, date(2024, 3, 29)),
            (&EASTER_SUNDAY, date(2024, 3, 31)),
            (&EASTER_MONDAY, date(2024, 4, 1)),
            (&ASCENSION, date(2024, 5, 9)),
            (&PENTECOST, date(2024, 5, 19)),
            (&WHIT_MONDAY, date(2024, 5, 20)),
            (&CORPUS_CHRISTI, date(2024, 5, 30)),
        ];
        for (holiday, expected) in cases {
            assert_eq!(holiday.first_after(start).unwrap(), expected, "{holiday}");
        }
    }

    #[test]
    fn sundays_are_sundays() {
        let start = date(2030, 1, 1);
        for h in ALL.iter().filter(|h| h.rule().days_after_easter() % 7 == 0) {
            assert_eq!(h.first_after(start).unwrap().weekday(), Weekday::Sunday, "{h}");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(by_name("PENTECOST").map(|h| h.name()), Some("Pentecost"));
        assert_eq!(by_name("rose monday"), Some(&SHROVE_MONDAY));
    }
}
