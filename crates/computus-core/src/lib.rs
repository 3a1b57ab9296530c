//! # computus-core
//!
//! Core type aliases and error definitions for computus-rs.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: the primitive aliases used for years, serial day numbers and
//! day offsets, and the error hierarchy with its `ensure!` / `fail!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A proleptic (astronomically numbered) calendar year: year 0 is 1 BC.
pub type Year = i32;

/// Serial day number; serial 0 is 1970-01-01 in the proleptic Gregorian
/// calendar.
pub type SerialNumber = i64;

/// A signed number of days, e.g. the distance of a holiday from Easter.
pub type DayOffset = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
