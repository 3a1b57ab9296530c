//! Julian-calendar reckoning for [`Date`].
//!
//! The Julian calendar uses the plain "every fourth year" leap rule with no
//! century exception.  Dates here are proleptic: the Julian rules are applied
//! unconditionally, never switched over to Gregorian at some historical
//! cutover.  A Julian `(year, month, day)` triple converts to the same
//! serial-number timeline as the Gregorian one, so the resulting [`Date`]
//! compares directly with any Gregorian date.

use crate::date::{march_based_day_of_year, month_day_from_march_based, Date};
use computus_core::errors::{Error, Result};
use computus_core::{SerialNumber, Year};

/// Days from Julian 0000-03-01 to Gregorian 1970-01-01 (= Julian 1969-12-19).
const JULIAN_EPOCH_SHIFT: i64 = 719_470;

/// Days in a 4-year Julian cycle.
const DAYS_PER_CYCLE: i64 = 1_461;

/// Whether a given year is a leap year in the Julian calendar.
pub fn is_julian_leap_year(year: Year) -> bool {
    year.rem_euclid(4) == 0
}

/// Number of days in a given month/year of the Julian calendar.
pub fn julian_days_in_month(year: Year, month: u8) -> u8 {
    match month {
        2 if is_julian_leap_year(year) => 29,
        2 => 28,
        _ => crate::date::days_in_month(year, month),
    }
}

impl Date {
    /// Create a date from a Julian-calendar year, month (1–12) and day.
    ///
    /// ```
    /// use computus_time::Date;
    /// // Julian 22 April 2024 is Gregorian 5 May 2024.
    /// let d = Date::from_julian_ymd(2024, 4, 22).unwrap();
    /// assert_eq!(d, Date::from_ymd(2024, 5, 5).unwrap());
    /// ```
    pub fn from_julian_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        Date::from_serial(julian_serial(year, month, day)?)
    }

    /// Return the Julian-calendar `(year, month, day)` of this date.
    pub fn to_julian_ymd(&self) -> (Year, u8, u8) {
        julian_ymd_from_serial(self.serial())
    }
}

/// Serial number of a Julian-calendar date.
///
/// Checks the month and day but not the [`Date`] range, so the result may
/// lie outside [`Date::MIN`, `Date::MAX`].
pub fn julian_serial(year: Year, month: u8, day: u8) -> Result<SerialNumber> {
    if !(1..=12).contains(&month) {
        return Err(Error::Date(format!("month {month} out of range [1, 12]")));
    }
    let days_in = julian_days_in_month(year, month);
    if day == 0 || day > days_in {
        return Err(Error::Date(format!(
            "day {day} out of range [1, {days_in}] for Julian {year}-{month:02}"
        )));
    }
    Ok(julian_serial_from_ymd(year, month, day))
}

fn julian_serial_from_ymd(year: Year, month: u8, day: u8) -> SerialNumber {
    let y = i64::from(year) - i64::from(month <= 2);
    let cycle = y.div_euclid(4);
    let yoc = y - cycle * 4; // [0, 3]
    let mp = (i64::from(month) + 9) % 12;
    let doy = march_based_day_of_year(mp, i64::from(day));
    cycle * DAYS_PER_CYCLE + yoc * 365 + doy - JULIAN_EPOCH_SHIFT
}

fn julian_ymd_from_serial(serial: SerialNumber) -> (Year, u8, u8) {
    let z = serial + JULIAN_EPOCH_SHIFT;
    let cycle = z.div_euclid(DAYS_PER_CYCLE);
    let doc = z - cycle * DAYS_PER_CYCLE; // [0, 1460]
    // The last day of a cycle is the leap day and still belongs to year 3.
    let yoc = (doc - doc / 1460) / 365;
    let doy = doc - 365 * yoc;
    let (month, day) = month_day_from_march_based(doy);
    let year = yoc + cycle * 4 + i64::from(month <= 2);
    (year as Year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gregorian_reform_boundary() {
        // Thursday 4 October 1582 (Julian) was followed by Friday 15 October
        // 1582 (Gregorian).
        let last_julian = Date::from_julian_ymd(1582, 10, 4).unwrap();
        let first_gregorian = Date::from_ymd(1582, 10, 15).unwrap();
        assert_eq!(last_julian + 1, first_gregorian);
    }

    #[test]
    fn serial_beyond_the_date_range() {
        let serial = julian_serial(Date::MAX_YEAR, 12, 31).unwrap();
        assert!(serial > Date::MAX.serial());
        assert!(Date::from_julian_ymd(Date::MAX_YEAR, 12, 31).is_err());
        assert_eq!(julian_serial(2024, 4, 22).unwrap(), Date::from_ymd(2024, 5, 5).unwrap().serial());
        assert!(julian_serial(2023, 2, 29).is_err());
    }

    #[test]
    fn epoch_alignment() {
        assert_eq!(Date::from_julian_ymd(1969, 12, 19).unwrap(), Date::EPOCH);
        assert_eq!(Date::EPOCH.to_julian_ymd(), (1969, 12, 19));
    }

    #[test]
    fn julian_leap_days() {
        // 1900 is a Julian leap year but not a Gregorian one.
        assert!(is_julian_leap_year(1900));
        assert!(!crate::date::is_leap_year(1900));
        let d = Date::from_julian_ymd(1900, 2, 29).unwrap();
        assert_eq!(d.to_julian_ymd(), (1900, 2, 29));
        assert_eq!(d, Date::from_ymd(1900, 3, 13).unwrap());
        assert!(Date::from_julian_ymd(1901, 2, 29).is_err());
        assert!(is_julian_leap_year(-4));
        assert!(!is_julian_leap_year(-3));
    }

    #[test]
    fn roundtrip_over_cycles() {
        let mut d = Date::from_ymd(1895, 1, 1).unwrap();
        let end = Date::from_ymd(1910, 1, 1).unwrap();
        while d < end {
            let (y, m, dd) = d.to_julian_ymd();
            assert_eq!(Date::from_julian_ymd(y, m, dd).unwrap(), d, "{d:?}");
            d += 1;
        }
    }

    #[test]
    fn out_of_range() {
        assert!(Date::from_julian_ymd(2_000_000, 1, 1).is_err());
        assert!(Date::from_julian_ymd(2024, 13, 1).is_err());
    }
}
