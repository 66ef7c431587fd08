//! Gregorian calendar dates on or after January 1, 1753.
//!
//! ```
//! use simple_date::{CalendarDate, Weekday};
//!
//! let leap_day = CalendarDate::new(2, 29, 2024)?;
//! assert_eq!(leap_day.next_date().to_string(), "March 1, 2024");
//! assert_eq!(CalendarDate::MIN.day_of_week(), Weekday::Monday);
//! # Ok::<(), simple_date::DateError>(())
//! ```

mod consts;
mod error;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use error::DateError;
pub use types::{Weekday, days_in_month, days_in_year, is_leap_year, is_valid_date};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, trace};
use types::{MAX_DAY_NUMBER, civil_from_day_number, day_number};

/// A valid date in the proleptic Gregorian calendar, no earlier than January 1, 1753.
///
/// Values are only created through validating constructors, and every derived
/// date (`next_date`, `prev_date`, `date_from`) is itself valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{} {}, {}", "self.month_name()", "self.day", "self.year")]
#[serde(try_from = "DateParts", into = "DateParts")]
pub struct CalendarDate {
    month: u8,
    day:   u8,
    year:  i32,
}

/// Serialized form of a `CalendarDate`, validated on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct DateParts {
    month: u8,
    day:   u8,
    year:  i32,
}

impl CalendarDate {
    /// January 1, `MIN_YEAR`, the earliest representable date
    pub const MIN: Self = Self {
        month: JANUARY,
        day:   MIN_DAY,
        year:  MIN_YEAR,
    };

    /// Creates a new date from month, day, and year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the triple fails `is_valid_date`.
    pub fn new(month: u8, day: u8, year: i32) -> Result<Self, DateError> {
        if !is_valid_date(month, day, year) {
            debug!(month, day, year, "rejected invalid date");
            return Err(DateError::InvalidDate { month, day, year });
        }
        Ok(Self { month, day, year })
    }

    /// Builds a date from components already known to be valid.
    const fn from_valid(month: u8, day: u8, year: i32) -> Self {
        debug_assert!(is_valid_date(month, day, year));
        Self { month, day, year }
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the English name of this date's month
    pub const fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    /// Checks whether this date falls in a leap year
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Returns the number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.month, self.year)
    }

    /// Returns the number of days in this date's year
    pub const fn days_in_year(&self) -> u16 {
        days_in_year(self.year)
    }

    /// Returns the position of this date within its year, counting January 1 as 1.
    pub fn ordinal_date(&self) -> u16 {
        let day = u16::from(self.day);
        match self.month {
            JANUARY => day,
            FEBRUARY => DAYS_THUS_FAR[FEBRUARY as usize] + day,
            month => {
                // leap day sits before March 1
                DAYS_THUS_FAR[month as usize] + day + u16::from(self.is_leap_year())
            }
        }
    }

    /// Returns the day of the week.
    ///
    /// The index into `Weekday::ALL` is the total number of days from January 1,
    /// 1753 through this date (inclusive) modulo 7, which puts the minimum date on
    /// a Monday.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn day_of_week(&self) -> Weekday {
        let total_days = self.day_number() + 1;
        Weekday::from_index(total_days.rem_euclid(DAYS_IN_WEEK as i64) as usize)
    }

    /// Days elapsed since `CalendarDate::MIN`
    const fn day_number(&self) -> i64 {
        day_number(self.month, self.day, self.year)
    }

    /// Returns the following day.
    ///
    /// December 31 of `i32::MAX` has no successor and is returned unchanged.
    pub fn next_date(&self) -> Self {
        let Self { month, day, year } = *self;

        if month == DECEMBER && day == DAYS_IN_MONTH[DECEMBER as usize] {
            return self.first_of_next_year();
        }

        if is_valid_date(month, day + 1, year) {
            Self::from_valid(month, day + 1, year)
        } else if is_valid_date(month + 1, MIN_DAY, year) {
            Self::from_valid(month + 1, MIN_DAY, year)
        } else {
            self.first_of_next_year()
        }
    }

    fn first_of_next_year(&self) -> Self {
        self.year
            .checked_add(1)
            .map_or(*self, |year| Self::from_valid(JANUARY, MIN_DAY, year))
    }

    /// Returns the preceding day.
    ///
    /// `CalendarDate::MIN` is its own predecessor.
    pub fn prev_date(&self) -> Self {
        let Self { month, day, year } = *self;

        if *self == Self::MIN {
            return Self::MIN;
        }

        if self.is_leap_year() && month == MARCH && day == MIN_DAY {
            Self::from_valid(FEBRUARY, FEBRUARY_DAYS_LEAP, year)
        } else if is_valid_date(month, day - 1, year) {
            Self::from_valid(month, day - 1, year)
        } else if day == MIN_DAY && month != JANUARY {
            // February in leap years is handled above
            Self::from_valid(month - 1, DAYS_IN_MONTH[(month - 1) as usize], year)
        } else if day == MIN_DAY && month == JANUARY {
            Self::from_valid(DECEMBER, DAYS_IN_MONTH[DECEMBER as usize], year - 1)
        } else {
            *self
        }
    }

    /// Returns the date `n` days after this one, or `-n` days before it when `n` is negative.
    ///
    /// The result is the same as stepping `next_date` or `prev_date` one day at a
    /// time, so a backward offset past the minimum stops at `CalendarDate::MIN`.
    pub fn date_from(&self, n: i64) -> Self {
        if n == 0 {
            return *self;
        }

        let target = self.day_number().saturating_add(n);
        let clamped = target.clamp(0, MAX_DAY_NUMBER);
        let (month, day, year) = civil_from_day_number(clamped);
        let result = Self::from_valid(month, day, year);

        trace!(offset = n, from = %self, to = %result, clamped = clamped != target, "computed date offset");
        result
    }

    /// Moves this date by `n` days, as `date_from` would.
    pub fn advance(&mut self, n: i64) {
        *self = self.date_from(n);
    }

    /// Returns the number of single-day steps between this date and `other`.
    ///
    /// The count is the same in either direction, and 0 when the dates are equal.
    pub const fn days_between(&self, other: &Self) -> u64 {
        self.day_number().abs_diff(other.day_number())
    }

    /// Compares chronologically, returning -1, 0, or 1.
    pub fn compare(&self, other: &Self) -> i8 {
        self.cmp(other) as i8
    }
}

impl Default for CalendarDate {
    fn default() -> Self {
        Self::MIN
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl TryFrom<(u8, u8, i32)> for CalendarDate {
    type Error = DateError;

    fn try_from((month, day, year): (u8, u8, i32)) -> Result<Self, Self::Error> {
        Self::new(month, day, year)
    }
}

impl TryFrom<DateParts> for CalendarDate {
    type Error = DateError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        Self::new(parts.month, parts.day, parts.year)
    }
}

impl From<CalendarDate> for DateParts {
    fn from(date: CalendarDate) -> Self {
        Self {
            month: date.month,
            day:   date.day,
            year:  date.year,
        }
    }
}
