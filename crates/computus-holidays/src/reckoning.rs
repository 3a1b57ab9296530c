//! `Reckoning` — which computus (and which calendar's leap rule) applies.

use computus_core::Year;
use computus_time::Date;
use serde::{Deserialize, Serialize};

/// How the date of Easter is reckoned.
///
/// Chosen once when a rule is built and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reckoning {
    /// Western Easter: Gregorian computus on the Gregorian calendar.
    #[default]
    Gregorian,
    /// Eastern Easter: Julian computus on the Julian calendar, with the
    /// result mapped onto the Gregorian timeline.
    OrthodoxJulian,
}

impl Reckoning {
    /// Return `true` for [`Reckoning::OrthodoxJulian`].
    pub fn is_orthodox(&self) -> bool {
        matches!(self, Reckoning::OrthodoxJulian)
    }

    /// The year `date` belongs to in the calendar this reckoning uses.
    ///
    /// Only differs from `date.year()` for Orthodox reckoning in the days
    /// around New Year where the two calendars disagree.
    pub fn calendar_year(&self, date: Date) -> Year {
        match self {
            Reckoning::Gregorian => date.year(),
            Reckoning::OrthodoxJulian => date.to_julian_ymd().0,
        }
    }
}

impl std::fmt::Display for Reckoning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Reckoning::Gregorian => "Gregorian",
            Reckoning::OrthodoxJulian => "Orthodox (Julian)",
        })
    }
}
