//! `HolidayTable` — a configurable set of Easter-relative holidays.
//!
//! A table is either the built-in [`catalog`](crate::catalog) or loaded from
//! JSON:
//!
//! ```json
//! {
//!   "holidays": [
//!     { "name": "Good Friday", "days_after_easter": -2 },
//!     { "name": "Orthodox Easter", "reckoning": "orthodox_julian" }
//!   ]
//! }
//! ```
//!
//! `days_after_easter` defaults to 0 and `reckoning` to `"gregorian"`.
//! Holiday names are unique, compared ignoring ASCII case.

use crate::catalog;
use crate::date_rule::DateRule;
use crate::holiday::EasterHoliday;
use crate::reckoning::Reckoning;
use computus_core::errors::{Error, Result};
use computus_core::DayOffset;
use computus_time::Date;
use serde::Deserialize;
use std::io::Read;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableConfig {
    holidays: Vec<HolidayConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HolidayConfig {
    name: String,
    #[serde(default)]
    days_after_easter: DayOffset,
    #[serde(default)]
    reckoning: Reckoning,
}

/// A single dated occurrence of a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'a> {
    /// The day it falls on.
    pub date: Date,
    /// Which holiday it is.
    pub holiday: &'a EasterHoliday,
}

/// An ordered set of uniquely named Easter holidays.
#[derive(Debug, Clone, Default)]
pub struct HolidayTable {
    holidays: Vec<EasterHoliday>,
}

impl HolidayTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding every entry of the built-in catalog.
    pub fn builtin() -> Self {
        Self {
            holidays: catalog::ALL.to_vec(),
        }
    }

    /// Parse a table from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TableConfig =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        Self::from_config(config)
    }

    /// Parse a table from a JSON reader (e.g. an open file).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: TableConfig =
            serde_json::from_reader(reader).map_err(|e| Error::Config(e.to_string()))?;
        Self::from_config(config)
    }

    fn from_config(config: TableConfig) -> Result<Self> {
        let mut table = Self::new();
        for entry in config.holidays {
            table
                .insert(EasterHoliday::with_reckoning(
                    entry.days_after_easter,
                    entry.reckoning,
                    entry.name,
                ))
                .map_err(|e| match e {
                    Error::InvalidArgument(msg) => Error::Config(msg),
                    other => other,
                })?;
        }
        debug!(holidays = table.len(), "loaded holiday table");
        Ok(table)
    }

    /// Add a holiday.  Fails with [`Error::InvalidArgument`] if the name is
    /// empty or already taken.
    pub fn insert(&mut self, holiday: EasterHoliday) -> Result<()> {
        if holiday.name().trim().is_empty() {
            return Err(Error::InvalidArgument("holiday name must not be empty".into()));
        }
        if self.get(holiday.name()).is_some() {
            return Err(Error::InvalidArgument(format!(
                "duplicate holiday name {:?}",
                holiday.name()
            )));
        }
        self.holidays.push(holiday);
        Ok(())
    }

    /// Look up a holiday by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&EasterHoliday> {
        self.holidays
            .iter()
            .find(|h| h.name().eq_ignore_ascii_case(name))
    }

    /// Number of holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// `true` if the table holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Iterate over the holidays in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, EasterHoliday> {
        self.holidays.iter()
    }

    /// Every holiday that falls on `date`.
    pub fn holidays_on(&self, date: Date) -> Vec<&EasterHoliday> {
        self.holidays.iter().filter(|h| h.is_on(date)).collect()
    }

    /// Every occurrence of every holiday in `[start, end)`, ordered by date
    /// and then by name.
    pub fn occurrences_between(&self, start: Date, end: Date) -> Result<Vec<Occurrence<'_>>> {
        let mut out = Vec::new();
        for holiday in &self.holidays {
            let mut cursor = start;
            while let Some(date) = holiday.first_between(cursor, Some(end))? {
                out.push(Occurrence { date, holiday });
                cursor = date.add_days(1)?;
            }
        }
        out.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.holiday.name().cmp(b.holiday.name()))
        });
        Ok(out)
    }
}

impl<'a> IntoIterator for &'a HolidayTable {
    type Item = &'a EasterHoliday;
    type IntoIter = std::slice::Iter<'a, EasterHoliday>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
