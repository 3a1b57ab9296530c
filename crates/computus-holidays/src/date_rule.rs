//! `DateRule` trait — a rule producing at most one date per year.
//!
//! A date rule answers "when does this next happen?" and "is this the day?"
//! queries for a recurring event.  Query ranges are half-open: `start` is
//! inclusive and `end` is exclusive.

use computus_core::errors::Result;
use computus_time::Date;

/// A recurring date rule.
///
/// Implementations are immutable values; every query is independent, so a
/// rule can be shared across threads without locking.
pub trait DateRule: std::fmt::Debug + Send + Sync {
    /// Return the first occurrence on or after `start`.
    fn first_after(&self, start: Date) -> Result<Date>;

    /// Return the first occurrence in `[start, end)`, or `None` if there is
    /// none.  With `end == None` the range is unbounded.
    ///
    /// An empty or inverted range (`end <= start`) always yields `Ok(None)`.
    fn first_between(&self, start: Date, end: Option<Date>) -> Result<Option<Date>> {
        if matches!(end, Some(end) if end <= start) {
            return Ok(None);
        }
        let candidate = self.first_after(start)?;
        Ok(match end {
            Some(end) if candidate >= end => None,
            _ => Some(candidate),
        })
    }

    /// Return `true` if `date` is an occurrence of this rule.
    fn is_on(&self, date: Date) -> bool;

    /// Return `true` if the rule occurs at least once in `[start, end)`.
    fn is_between(&self, start: Date, end: Date) -> Result<bool> {
        Ok(self.first_between(start, Some(end))?.is_some())
    }
}
