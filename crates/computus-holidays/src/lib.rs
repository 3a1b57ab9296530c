//! # computus-holidays
//!
//! The Easter computus and the holidays defined relative to it.
//!
//! * [`computus`] — Western (Gregorian) and Orthodox (Julian) Easter Sunday.
//! * [`DateRule`] — the "next occurrence" / "is this the day" query trait.
//! * [`EasterRule`] — Easter plus a signed day offset.
//! * [`EasterHoliday`] and the built-in [`catalog`].
//! * [`HolidayTable`] — a named set of holidays, built in or loaded from JSON.
//!
//! ```
//! use computus_holidays::{catalog, DateRule};
//! use computus_time::Date;
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let ascension = catalog::ASCENSION.first_after(start).unwrap();
//! assert_eq!(ascension, Date::from_ymd(2024, 5, 9).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Built-in Easter-relative holidays.
pub mod catalog;

/// Easter Sunday algorithms.
pub mod computus;

/// `DateRule` trait.
pub mod date_rule;

/// `EasterRule` — Easter plus an offset.
pub mod easter_rule;

/// `EasterHoliday` — a named `EasterRule`.
pub mod holiday;

/// `Reckoning` — which Easter to count from.
pub mod reckoning;

/// `HolidayTable` — configurable holiday sets.
pub mod table;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use computus::easter_sunday;
pub use date_rule::DateRule;
pub use easter_rule::EasterRule;
pub use holiday::EasterHoliday;
pub use reckoning::Reckoning;
pub use table::{HolidayTable, Occurrence};
