//! # computus-time
//!
//! Value-typed civil dates on the proleptic Gregorian timeline, with
//! Julian-calendar conversions, month and weekday enums.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Julian-calendar reckoning for `Date`.
pub mod julian;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

#[cfg(feature = "chrono")]
mod chrono_compat;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use julian::{is_julian_leap_year, julian_days_in_month, julian_serial};
pub use month::Month;
pub use weekday::Weekday;
