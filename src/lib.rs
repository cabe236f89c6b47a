mod consts;
mod defaults;
mod prelude;
mod types;

pub use consts::*;
pub use defaults::{
    DateConfig, DefaultDate, reset_default_date, set_default_date, shared_default,
};
pub use types::{Day, Month, ValidationPolicy};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A day/month/year value.
///
/// Day and month are checked whenever they are written through a setter or
/// the constructors. The year is never checked. The `add_*` mutators shift a
/// field without any checking or carrying, so `15 + 20` days is day `35`.
///
/// Equality and hashing look at day, month and year only; the policy is a
/// write setting, not part of the value.
#[derive(Debug, Clone, Copy, Display, Serialize, Deserialize)]
#[display(fmt = "{}/{}/{}", day, month, year)]
pub struct DateValue {
    day:    i32,
    month:  i32,
    year:   i32,
    #[serde(skip)]
    policy: ValidationPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid day: {0} (must be {min}-{max})", min = MIN_DAY, max = MAX_DAY)]
    DayOutOfRange(i32),
    #[error("Invalid month: {0} (must be {min}-{max})", min = MIN_MONTH, max = MAX_MONTH)]
    MonthOutOfRange(i32),
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Empty date string")]
    EmptyInput,
}

impl DateValue {
    /// Creates a date, taking every `None` field from a snapshot of the
    /// shared default.
    ///
    /// An explicit day or month that is out of range is dropped and the
    /// default's field is kept instead.
    pub fn new(day: Option<i32>, month: Option<i32>, year: Option<i32>) -> Self {
        Self::with_defaults(day, month, year, &shared_default())
    }

    /// Same as [`DateValue::new`] but `0` stands for "unset".
    pub fn from_sentinel(day: i32, month: i32, year: i32) -> Self {
        Self::new(unset_if_sentinel(day), unset_if_sentinel(month), unset_if_sentinel(year))
    }

    /// Creates a date against an explicit default instead of the shared one.
    pub fn with_defaults(
        day: Option<i32>,
        month: Option<i32>,
        year: Option<i32>,
        defaults: &DefaultDate,
    ) -> Self {
        let mut date = Self::from_default(defaults, ValidationPolicy::Ignore);
        // Ignore never fails
        let _ = date.apply(day, month, year);
        date
    }

    /// Creates a date against `config`.
    ///
    /// # Errors
    /// Under `ValidationPolicy::Report` returns `DateError::DayOutOfRange` or
    /// `DateError::MonthOutOfRange` for an explicit out-of-range field.
    pub fn try_with_config(
        day: Option<i32>,
        month: Option<i32>,
        year: Option<i32>,
        config: &DateConfig,
    ) -> Result<Self, DateError> {
        let mut date = Self::from_default(&config.defaults, config.policy);
        date.apply(day, month, year)?;
        Ok(date)
    }

    /// Overwrites the shared default used by dates constructed from now on.
    /// Dates that already exist keep their values.
    pub fn set_default_date(day: i32, month: i32, year: i32) {
        set_default_date(day, month, year);
    }

    const fn from_default(defaults: &DefaultDate, policy: ValidationPolicy) -> Self {
        Self {
            day: defaults.day,
            month: defaults.month,
            year: defaults.year,
            policy,
        }
    }

    fn apply(
        &mut self,
        day: Option<i32>,
        month: Option<i32>,
        year: Option<i32>,
    ) -> Result<(), DateError> {
        if let Some(d) = day {
            self.set_day(d)?;
        }
        if let Some(m) = month {
            self.set_month(m)?;
        }
        if let Some(y) = year {
            self.set_year(y);
        }
        Ok(())
    }

    /// Returns a copy that uses `policy` for later writes
    #[must_use]
    pub const fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub const fn set_policy(&mut self, policy: ValidationPolicy) {
        self.policy = policy;
    }

    pub const fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub const fn day(&self) -> i32 {
        self.day
    }

    pub const fn month(&self) -> i32 {
        self.month
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns `(day, month, year)`
    pub const fn to_tuple(&self) -> (i32, i32, i32) {
        (self.day, self.month, self.year)
    }

    /// Sets the day if it is within `MIN_DAY..=MAX_DAY`.
    /// Otherwise the current day is kept.
    ///
    /// # Errors
    /// Returns `DateError::DayOutOfRange` only under `ValidationPolicy::Report`.
    pub fn set_day(&mut self, day: i32) -> Result<(), DateError> {
        match Day::new(day) {
            Ok(d) => {
                self.day = d.get();
                Ok(())
            }
            Err(err) => self.policy.rejected(err),
        }
    }

    /// Sets the month if it is within `MIN_MONTH..=MAX_MONTH`.
    /// Otherwise the current month is kept.
    ///
    /// # Errors
    /// Returns `DateError::MonthOutOfRange` only under `ValidationPolicy::Report`.
    pub fn set_month(&mut self, month: i32) -> Result<(), DateError> {
        match Month::new(month) {
            Ok(m) => {
                self.month = m.get();
                Ok(())
            }
            Err(err) => self.policy.rejected(err),
        }
    }

    /// Sets the year. Any value is accepted.
    pub const fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    pub const fn add_day(&mut self, days: i32) {
        self.day = self.day.wrapping_add(days);
    }

    pub const fn add_month(&mut self, months: i32) {
        self.month = self.month.wrapping_add(months);
    }

    pub const fn add_year(&mut self, years: i32) {
        self.year = self.year.wrapping_add(years);
    }
}

impl PartialEq for DateValue {
    fn eq(&self, other: &Self) -> bool {
        self.to_tuple() == other.to_tuple()
    }
}

impl Eq for DateValue {}

impl Hash for DateValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_tuple().hash(state);
    }
}

impl Default for DateValue {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

const fn unset_if_sentinel(value: i32) -> Option<i32> {
    if value == UNSET_SENTINEL {
        None
    } else {
        Some(value)
    }
}

impl FromStr for DateValue {
    type Err = DateError;

    /// Parses `day/month/year`. Every field must be present and in range;
    /// nothing is taken from the shared default.
    ///
    /// Stricter than `Display` and serde: a date pushed out of range by the
    /// `add_*` mutators or an unvalidated default prints (`35/8/2024`) but does
    /// not parse back. Use serde to round-trip such values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(FIELD_SEPARATOR).map(str::trim).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected day{FIELD_SEPARATOR}month{FIELD_SEPARATOR}year, found {} part(s): {s}",
                parts.len()
            )));
        };

        let day = Day::new(parse_i32(day)?)?;
        let month = Month::new(parse_i32(month)?)?;
        let year = parse_i32(year)?;

        Ok(Self {
            day: day.get(),
            month: month.get(),
            year,
            policy: ValidationPolicy::default(),
        })
    }
}

fn parse_i32(s: &str) -> Result<i32, DateError> {
    s.parse::<i32>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}
