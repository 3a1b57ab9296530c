//! The Easter computus.
//!
//! Implements the Calendar FAQ formulation of the computus: the anonymous
//! Gregorian algorithm for Western Easter and the Julian (Meeus) algorithm
//! for Orthodox Easter.  Both branches are pure integer arithmetic on `i64`,
//! so no intermediate product can overflow for any supported year.
//!
//! Division is floor division (`div_euclid` / `rem_euclid`).  For years ≥ 0
//! every dividend is non-negative and this is identical to truncating
//! division; for proleptic negative years it keeps the result inside the
//! usual March 22 – April 25 window.

use crate::reckoning::Reckoning;
use computus_core::errors::Result;
use computus_core::{ensure, SerialNumber, Year};
use computus_time::{julian_serial, Date};

/// Paschal full moon offset `i` (days after March 21) and its weekday `j`
/// (0 = Sunday) for the Gregorian computus.
fn gregorian_moon(year: i64) -> (i64, i64) {
    let g = year.rem_euclid(19); // Metonic cycle position
    let c = year.div_euclid(100);
    let h = (c - c.div_euclid(4) - (8 * c + 13).div_euclid(25) + 19 * g + 15).rem_euclid(30);
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (year + year.div_euclid(4) + i + 2 - c + c.div_euclid(4)).rem_euclid(7);
    (i, j)
}

/// Same as [`gregorian_moon`] for the Julian computus.
fn julian_moon(year: i64) -> (i64, i64) {
    let g = year.rem_euclid(19);
    let i = (19 * g + 15).rem_euclid(30);
    let j = (year + year.div_euclid(4) + i).rem_euclid(7);
    (i, j)
}

/// Turn `(i, j)` into the `(month, day)` of Easter Sunday.
fn month_day(i: i64, j: i64) -> (u8, u8) {
    let l = i - j;
    let month = 3 + (l + 40) / 44;
    let day = l + 28 - 31 * (month / 4);
    (month as u8, day as u8)
}

fn check_year(year: Year) -> Result<()> {
    ensure!(
        (Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year),
        "year {year} out of range [{}, {}]",
        Date::MIN_YEAR,
        Date::MAX_YEAR
    );
    Ok(())
}

/// `(year, month, day)` of Western Easter Sunday on the Gregorian calendar.
pub fn gregorian_easter_sunday(year: Year) -> Result<(Year, u8, u8)> {
    check_year(year)?;
    let (i, j) = gregorian_moon(i64::from(year));
    let (m, d) = month_day(i, j);
    Ok((year, m, d))
}

/// `(year, month, day)` of Orthodox Easter Sunday on the **Julian** calendar.
///
/// ```
/// use computus_holidays::computus::julian_easter_sunday;
/// assert_eq!(julian_easter_sunday(2024).unwrap(), (2024, 4, 22));
/// ```
pub fn julian_easter_sunday(year: Year) -> Result<(Year, u8, u8)> {
    check_year(year)?;
    let (i, j) = julian_moon(i64::from(year));
    let (m, d) = month_day(i, j);
    Ok((year, m, d))
}

/// The date of Easter Sunday in `year` under the given reckoning.
///
/// Orthodox Easter is computed with Julian leap-year rules throughout and
/// then placed on the Gregorian timeline, so the returned [`Date`] compares
/// directly with any other date.
///
/// Years outside [`Date::MIN_YEAR`, `Date::MAX_YEAR`] are a precondition
/// violation.  An Orthodox Easter whose Gregorian equivalent falls past
/// [`Date::MAX`] is a date error.
///
/// ```
/// use computus_holidays::{easter_sunday, Reckoning};
/// use computus_time::Date;
///
/// let western = easter_sunday(2024, Reckoning::Gregorian).unwrap();
/// let orthodox = easter_sunday(2024, Reckoning::OrthodoxJulian).unwrap();
/// assert_eq!(western, Date::from_ymd(2024, 3, 31).unwrap());
/// assert_eq!(orthodox, Date::from_ymd(2024, 5, 5).unwrap());
/// ```
pub fn easter_sunday(year: Year, reckoning: Reckoning) -> Result<Date> {
    match reckoning {
        Reckoning::Gregorian => {
            let (y, m, d) = gregorian_easter_sunday(year)?;
            Date::from_ymd(y, m, d)
        }
        Reckoning::OrthodoxJulian => {
            let (y, m, d) = julian_easter_sunday(year)?;
            Date::from_julian_ymd(y, m, d)
        }
    }
}

/// Serial number of Easter Sunday in `year`.  Unlike [`easter_sunday`], an
/// Orthodox Easter past [`Date::MAX`] is still returned.
pub(crate) fn easter_serial(year: Year, reckoning: Reckoning) -> Result<SerialNumber> {
    match reckoning {
        Reckoning::Gregorian => Ok(easter_sunday(year, reckoning)?.serial()),
        Reckoning::OrthodoxJulian => {
            let (y, m, d) = julian_easter_sunday(year)?;
            julian_serial(y, m, d)
        }
    }
}
