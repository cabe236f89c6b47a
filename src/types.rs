use crate::DateError;
use crate::consts::{MAX_DAY, MAX_MONTH, MIN_DAY, MIN_MONTH};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A day value guaranteed to be in the range `MIN_DAY..=MAX_DAY` (1..=31)
/// Only the coarse range is checked, not the length of any particular month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Day(i32);

impl Day {
    /// Creates a new Day, validating that it's within `MIN_DAY..=MAX_DAY`
    ///
    /// # Errors
    /// Returns `DateError::DayOutOfRange` if the value is outside 1..=31.
    pub const fn new(value: i32) -> Result<Self, DateError> {
        if value < MIN_DAY || value > MAX_DAY {
            return Err(DateError::DayOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the day value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Day {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for i32 {
    fn from(day: Day) -> Self {
        day.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `MIN_MONTH..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Month(i32);

impl Month {
    /// Creates a new Month, validating that it's within `MIN_MONTH..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::MonthOutOfRange` if the value is outside 1..=12.
    pub const fn new(value: i32) -> Result<Self, DateError> {
        if value < MIN_MONTH || value > MAX_MONTH {
            return Err(DateError::MonthOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the month value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Month {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for i32 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a validated write does with out-of-range input.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Drop the write and keep the old value, reporting nothing
    #[default]
    #[display(fmt = "ignore")]
    Ignore,
    /// Drop the write, keep the old value and return an error
    #[display(fmt = "report")]
    Report,
}

impl ValidationPolicy {
    /// Turns a rejected write into the result the caller sees under this policy.
    pub(crate) fn rejected(self, err: DateError) -> Result<(), DateError> {
        match self {
            Self::Ignore => Ok(()),
            Self::Report => Err(err),
        }
    }
}
