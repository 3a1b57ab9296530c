//! `EasterRule` — a date rule a fixed number of days before or after Easter.

use crate::computus::easter_serial;
use crate::date_rule::DateRule;
use crate::reckoning::Reckoning;
use computus_core::errors::{Error, Result};
use computus_core::{fail, DayOffset, Year};
use computus_time::Date;
use tracing::trace;

/// Rough day of the year on which Easter falls; only used to choose the year
/// a search starts from.
const EASTER_DAY_OF_YEAR: DayOffset = 100;

/// A holiday rule defined as a signed offset from Easter Sunday.
///
/// The rule fires exactly once per computus year, on Easter Sunday of that
/// year plus `days_after_easter` days.  The offset may be arbitrarily large
/// in either direction, so an occurrence can land in a neighbouring calendar
/// year.
///
/// ```
/// use computus_holidays::{DateRule, EasterRule};
/// use computus_time::Date;
///
/// let good_friday = EasterRule::western(-2);
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// assert_eq!(
///     good_friday.first_after(start).unwrap(),
///     Date::from_ymd(2024, 3, 29).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EasterRule {
    days_after_easter: DayOffset,
    reckoning: Reckoning,
}

impl EasterRule {
    /// Create a rule `days_after_easter` days from Easter (negative = before).
    pub const fn new(days_after_easter: DayOffset, reckoning: Reckoning) -> Self {
        Self {
            days_after_easter,
            reckoning,
        }
    }

    /// A rule relative to Western (Gregorian) Easter.
    pub const fn western(days_after_easter: DayOffset) -> Self {
        Self::new(days_after_easter, Reckoning::Gregorian)
    }

    /// A rule relative to Orthodox (Julian) Easter.
    pub const fn orthodox(days_after_easter: DayOffset) -> Self {
        Self::new(days_after_easter, Reckoning::OrthodoxJulian)
    }

    /// Days from Easter Sunday to the occurrence.
    pub fn days_after_easter(&self) -> DayOffset {
        self.days_after_easter
    }

    /// The reckoning used to compute Easter.
    pub fn reckoning(&self) -> Reckoning {
        self.reckoning
    }

    /// The occurrence belonging to Easter of `year`.
    ///
    /// Easter itself may lie outside the `Date` range as long as the
    /// occurrence does not.
    pub fn occurrence_in_year(&self, year: Year) -> Result<Date> {
        let easter = easter_serial(year, self.reckoning)?;
        match easter.checked_add(self.days_after_easter) {
            Some(serial) => Date::from_serial(serial),
            None => Err(Error::Date(format!("{} overflows in year {year}", self))),
        }
    }

    /// The earliest occurrence on or after `start`.
    ///
    /// Occurrences strictly increase with the Easter year, so the search
    /// starts at the year whose occurrence should be near `start` and steps
    /// forward past anything before `start`, then back while the previous
    /// year still qualifies.  For offsets of less than about eight months
    /// this is just "this year's occurrence, or next year's if it already
    /// passed".
    ///
    /// Fails with [`Error::Runtime`] when no
    /// occurrence on or after `start` lies before [`Date::MAX`].
    pub fn first_on_or_after(&self, start: Date) -> Result<Date> {
        match self.next_occurrence(start) {
            Some(found) => Ok(found),
            None => fail!(
                "{} has no occurrence between {:?} and {:?}",
                self,
                start,
                Date::MAX
            ),
        }
    }

    fn next_occurrence(&self, start: Date) -> Option<Date> {
        let mut year = self.search_year(start);
        let mut found = loop {
            match self.locate(year) {
                Slot::At(found) if found >= start => break found,
                Slot::After => return None,
                _ if year == Date::MAX_YEAR => return None,
                _ => {
                    trace!(year, ?start, "occurrence precedes start, advancing a year");
                    year += 1;
                }
            }
        };
        while year > Date::MIN_YEAR {
            match self.locate(year - 1) {
                Slot::At(earlier) if earlier >= start => {
                    trace!(year, ?earlier, "earlier Easter year still qualifies");
                    year -= 1;
                    found = earlier;
                }
                _ => break,
            }
        }
        Some(found)
    }

    /// Where the occurrence of `year` sits relative to the `Date` range.
    fn locate(&self, year: Year) -> Slot {
        // Callers keep `year` within range, so the computus cannot fail.
        let Ok(easter) = easter_serial(year, self.reckoning) else {
            return Slot::After;
        };
        match easter.checked_add(self.days_after_easter) {
            Some(serial) if serial < Date::MIN.serial() => Slot::Before,
            Some(serial) => Date::from_serial(serial).map_or(Slot::After, Slot::At),
            None if self.days_after_easter < 0 => Slot::Before,
            None => Slot::After,
        }
    }

    fn search_year(&self, start: Date) -> Year {
        let shift = EASTER_DAY_OF_YEAR
            .saturating_add(self.days_after_easter)
            .div_euclid(365);
        let year = i64::from(self.reckoning.calendar_year(start)).saturating_sub(shift);
        year.clamp(i64::from(Date::MIN_YEAR), i64::from(Date::MAX_YEAR)) as Year
    }
}

/// An occurrence, or the side of the `Date` range it falls off.
enum Slot {
    Before,
    At(Date),
    After,
}

impl DateRule for EasterRule {
    fn first_after(&self, start: Date) -> Result<Date> {
        self.first_on_or_after(start)
    }

    /// Never fails: an occurrence past [`Date::MAX`] is outside any range.
    fn first_between(&self, start: Date, end: Option<Date>) -> Result<Option<Date>> {
        if matches!(end, Some(end) if end <= start) {
            return Ok(None);
        }
        Ok(self
            .next_occurrence(start)
            .filter(|found| end.map_or(true, |end| *found < end)))
    }

    /// Exact date equality with an occurrence, so an occurrence that rolled
    /// over into a neighbouring calendar year is still recognised.
    fn is_on(&self, date: Date) -> bool {
        let found = self.next_occurrence(date);
        if found.is_none() {
            trace!(?date, rule = %self, "no occurrence on or after date");
        }
        found == Some(date)
    }
}

impl std::fmt::Display for EasterRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.days_after_easter;
        let unit = if n.unsigned_abs() == 1 { "day" } else { "days" };
        match n {
            0 => write!(f, "Easter Sunday ({})", self.reckoning),
            n if n < 0 => write!(f, "Easter - {} {unit} ({})", n.unsigned_abs(), self.reckoning),
            n => write!(f, "Easter + {n} {unit} ({})", self.reckoning),
        }
    }
}
