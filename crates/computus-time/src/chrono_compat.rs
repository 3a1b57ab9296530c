//! Conversions between [`Date`] and [`chrono::NaiveDate`].
//!
//! Enabled with the `chrono` feature.  Every `NaiveDate` fits inside the
//! [`Date`] range, so that direction is infallible; the reverse fails for
//! dates beyond chrono's ±262 143-year window.

use crate::date::Date;
use chrono::{Datelike, NaiveDate};
use computus_core::errors::Error;

/// `NaiveDate::num_days_from_ce()` of 1970-01-01.
const CE_TO_EPOCH: i64 = 719_163;

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date::from_serial_unchecked(i64::from(d.num_days_from_ce()) - CE_TO_EPOCH)
    }
}

impl TryFrom<Date> for NaiveDate {
    type Error = Error;

    fn try_from(d: Date) -> Result<Self, Self::Error> {
        i32::try_from(d.serial() + CE_TO_EPOCH)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or_else(|| Error::Date(format!("{d:?} is outside the chrono date range")))
    }
}
