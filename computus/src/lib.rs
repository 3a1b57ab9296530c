//! # computus
//!
//! Easter Sunday for the Western (Gregorian) and Orthodox (Julian)
//! churches, and date rules for the holidays counted from it.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `computus-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! computus = "0.1"
//! ```
//!
//! ```rust
//! use computus::holidays::{catalog, easter_sunday, DateRule, Reckoning};
//! use computus::time::Date;
//!
//! let easter = easter_sunday(2024, Reckoning::Gregorian).unwrap();
//! assert_eq!(easter, Date::from_ymd(2024, 3, 31).unwrap());
//! assert!(catalog::GOOD_FRIDAY.is_on(easter - 2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core type aliases and error definitions.
pub use computus_core as core;

/// Dates, months, weekdays, and Julian conversions.
pub use computus_time as time;

/// The computus, date rules, and the holiday catalog.
pub use computus_holidays as holidays;
