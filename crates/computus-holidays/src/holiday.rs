//! `EasterHoliday` — a named holiday at a fixed offset from Easter.

use crate::date_rule::DateRule;
use crate::easter_rule::EasterRule;
use crate::reckoning::Reckoning;
use computus_core::errors::Result;
use computus_core::DayOffset;
use computus_time::Date;
use std::borrow::Cow;

/// A holiday that falls a fixed number of days before or after Easter.
///
/// The name is carried verbatim; all date logic is delegated to the wrapped
/// [`EasterRule`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EasterHoliday {
    name: Cow<'static, str>,
    rule: EasterRule,
}

impl EasterHoliday {
    /// A holiday on Western Easter Sunday itself.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self::with_offset(0, name)
    }

    /// A holiday `days_after_easter` days from Western Easter.
    pub fn with_offset(days_after_easter: DayOffset, name: impl Into<Cow<'static, str>>) -> Self {
        Self::with_reckoning(days_after_easter, Reckoning::Gregorian, name)
    }

    /// A holiday `days_after_easter` days from Easter under `reckoning`.
    pub fn with_reckoning(
        days_after_easter: DayOffset,
        reckoning: Reckoning,
        name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            rule: EasterRule::new(days_after_easter, reckoning),
        }
    }

    /// Compile-time constructor used by the built-in catalog.
    pub const fn from_static(name: &'static str, rule: EasterRule) -> Self {
        Self {
            name: Cow::Borrowed(name),
            rule,
        }
    }

    /// The holiday's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying rule.
    pub fn rule(&self) -> EasterRule {
        self.rule
    }

    /// The same holiday reckoned from the other Easter.
    ///
    /// ```
    /// use computus_holidays::{catalog, Reckoning};
    /// let orthodox = catalog::GOOD_FRIDAY.reckoned(Reckoning::OrthodoxJulian);
    /// assert_eq!(orthodox.name(), "Good Friday");
    /// assert!(orthodox.rule().reckoning().is_orthodox());
    /// ```
    pub fn reckoned(&self, reckoning: Reckoning) -> Self {
        Self {
            name: self.name.clone(),
            rule: EasterRule::new(self.rule.days_after_easter(), reckoning),
        }
    }
}

impl DateRule for EasterHoliday {
    fn first_after(&self, start: Date) -> Result<Date> {
        self.rule.first_after(start)
    }

    fn first_between(&self, start: Date, end: Option<Date>) -> Result<Option<Date>> {
        self.rule.first_between(start, end)
    }

    fn is_on(&self, date: Date) -> bool {
        self.rule.is_on(date)
    }

    fn is_between(&self, start: Date, end: Date) -> Result<bool> {
        self.rule.is_between(start, end)
    }
}

impl std::fmt::Display for EasterHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn constructors() {
        let easter = EasterHoliday::new("Easter");
        assert_eq!(easter.rule(), EasterRule::western(0));

        let ascension = EasterHoliday::with_offset(39, String::from("Ascension"));
        assert_eq!(ascension.name(), "Ascension");
        assert_eq!(ascension.rule().days_after_easter(), 39);

        let pascha = EasterHoliday::with_reckoning(0, Reckoning::OrthodoxJulian, "Pascha");
        assert_eq!(pascha.to_string(), "Pascha");
        assert!(pascha.is_on(date(2024, 5, 5)));
    }

    #[test]
    fn delegates_to_rule() {
        let h = EasterHoliday::with_offset(1, "Easter Monday");
        let start = date(2024, 4, 2);
        assert_eq!(h.first_after(start).unwrap(), h.rule().first_after(start).unwrap());
        assert_eq!(h.first_after(start).unwrap(), date(2025, 4, 21));
        assert_eq!(h.first_between(start, Some(date(2025, 1, 1))).unwrap(), None);
        assert!(h.is_between(date(2024, 4, 1), date(2024, 4, 2)).unwrap());
    }
}
