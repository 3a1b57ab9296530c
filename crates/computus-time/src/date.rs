//! `Date` type — a proleptic Gregorian civil date.
//!
//! Dates are represented as a serial number of days relative to an epoch.
//!
//! # Serial number convention
//! * Serial 0 = January 1, 1970 (proleptic Gregorian).
//! * Negative serials are dates before the epoch; there is no null sentinel.
//! * Years use astronomical numbering (year 0 = 1 BC, year −1 = 2 BC).
//! * The valid range is [`Date::MIN`] (−1 000 000-01-01) to [`Date::MAX`]
//!   (1 000 000-12-31).  Every intermediate value fits comfortably in `i64`.

use crate::month::Month;
use crate::weekday::Weekday;
use computus_core::errors::{Error, Result};
use computus_core::{ensure, DayOffset, SerialNumber, Year};

/// A calendar date represented as a serial number.
///
/// `Date` is a plain `Copy` value: arithmetic produces new dates and never
/// mutates shared state, so dates can be passed freely between threads.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(SerialNumber);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Earliest supported year.
    pub const MIN_YEAR: Year = -1_000_000;

    /// Latest supported year.
    pub const MAX_YEAR: Year = 1_000_000;

    /// Minimum valid date: January 1, −1 000 000.
    pub const MIN: Date = Date(-365_962_028);

    /// Maximum valid date: December 31, 1 000 000.
    pub const MAX: Date = Date(364_523_337);

    /// January 1, 1970 (serial 0).
    pub const EPOCH: Date = Date(0);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial lies outside [`Date::MIN`, `Date::MAX`].
    pub fn from_serial(serial: SerialNumber) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// A year outside [`Date::MIN_YEAR`, `Date::MAX_YEAR`] is a caller
    /// precondition violation; an impossible month or day is a date error.
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        ensure!(
            (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year),
            "year {year} out of range [{}, {}]",
            Self::MIN_YEAR,
            Self::MAX_YEAR
        );
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from a serial number already known to be in range.
    #[cfg_attr(not(feature = "chrono"), allow(dead_code))]
    pub(crate) fn from_serial_unchecked(serial: SerialNumber) -> Self {
        debug_assert!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            "invalid date serial {serial}"
        );
        Date(serial)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> SerialNumber {
        self.0
    }

    /// Return the `(year, month, day)` triple.
    pub fn ymd(&self) -> (Year, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).expect("month is always in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let year = self.year();
        (self.0 - serial_from_ymd(year, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` moves backwards).
    ///
    /// Returns an error if the result is out of range.
    pub fn add_days(self, n: DayOffset) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) => Self::from_serial(serial),
            None => Err(Error::Date(format!(
                "date arithmetic: {self:?} + {n} days overflows"
            ))),
        }
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> DayOffset {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<DayOffset> for Date {
    type Output = Self;
    fn add(self, rhs: DayOffset) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<DayOffset> for Date {
    type Output = Self;
    fn sub(self, rhs: DayOffset) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = DayOffset;
    fn sub(self, rhs: Date) -> DayOffset {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<DayOffset> for Date {
    fn add_assign(&mut self, rhs: DayOffset) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

impl std::ops::SubAssign<DayOffset> for Date {
    fn sub_assign(&mut self, rhs: DayOffset) {
        *self = self.add_days(-rhs).expect("date subtraction underflow");
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, _, d) = ymd_from_serial(self.0);
        write!(f, "{d} {} {y}", self.month_of_year())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year in the Gregorian calendar.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year of the Gregorian calendar.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Days from 0000-03-01 to 1970-01-01 in the proleptic Gregorian calendar.
const GREGORIAN_EPOCH_SHIFT: i64 = 719_468;

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;

/// Day-of-year (counted from March 1) at which each month starts, for the
/// March-based month index `mp` (March = 0 … February = 11).
pub(crate) fn march_based_day_of_year(mp: i64, day: i64) -> i64 {
    (153 * mp + 2) / 5 + day - 1
}

/// Inverse of [`march_based_day_of_year`]: `(month 1–12, day)` for a
/// March-based day of year.
pub(crate) fn month_day_from_march_based(doy: i64) -> (u8, u8) {
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    (month as u8, day as u8)
}

/// Convert a (year, month, day) triple to a serial number.
///
/// Years are shifted so that they start on March 1, which puts the leap day
/// at the end of the shifted year.
fn serial_from_ymd(year: Year, month: u8, day: u8) -> SerialNumber {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = (i64::from(month) + 9) % 12; // March = 0
    let doy = march_based_day_of_year(mp, i64::from(day));
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * DAYS_PER_ERA + doe - GREGORIAN_EPOCH_SHIFT
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: SerialNumber) -> (Year, u8, u8) {
    let z = serial + GREGORIAN_EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let (month, day) = month_day_from_march_based(doy);
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year as Year, month, day)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1970, 1, 1).serial(), 0);
        assert_eq!(date(1969, 12, 31).serial(), -1);
        assert_eq!(date(2000, 3, 1).serial(), 11_017);
    }

    #[test]
    fn test_limits() {
        assert_eq!(date(Date::MIN_YEAR, 1, 1), Date::MIN);
        assert_eq!(date(Date::MAX_YEAR, 12, 31), Date::MAX);
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
        assert!(Date::from_serial(Date::MAX.serial() + 1).is_err());
    }

    #[test]
    fn test_year_out_of_range_is_precondition() {
        let err = Date::from_ymd(Date::MAX_YEAR + 1, 1, 1).unwrap_err();
        assert!(matches!(err, Error::Precondition(_)), "{err}");
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 2, 28), // non-leap century
            (2000, 2, 29), // leap century
            (2023, 6, 15),
            (2199, 12, 31),
            (0, 2, 29), // 1 BC is a Gregorian leap year
            (-1, 12, 31),
            (-4713, 11, 24),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_day() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 4, 31).is_err());
        assert!(Date::from_ymd(2023, 0, 1).is_err());
        assert!(Date::from_ymd(2023, 1, 0).is_err());
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        // 2024-01-06 is a Saturday
        assert_eq!(date(2024, 1, 6).weekday(), Weekday::Saturday);
        assert_eq!(Date::EPOCH.weekday(), Weekday::Thursday);
        assert_eq!(date(1969, 12, 28).weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(2024, 1, 1).day_of_year(), 1);
        assert_eq!(date(2024, 3, 31).day_of_year(), 91);
        assert_eq!(date(2023, 3, 31).day_of_year(), 90);
        assert_eq!(date(2024, 12, 31).day_of_year(), 366);
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2023, 1, 1);
        let d2 = d + 31;
        assert_eq!(d2.month(), 2);
        assert_eq!(d2.day_of_month(), 1);
        assert_eq!(date(2023, 2, 1) - d, 31);
        assert_eq!(date(2024, 3, 31) - 2, date(2024, 3, 29));
        assert_eq!(date(2023, 12, 31) + 1, date(2024, 1, 1));
        assert_eq!(d.days_between(date(2022, 12, 31)), -1);
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2024, 3, 31).to_string(), "31 March 2024");
        assert_eq!(format!("{:?}", date(2024, 3, 9)), "Date(2024-03-09)");
    }
}
