use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_IN_WEEK, DAYS_LEAP_YEAR, DAYS_YEAR, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY, MIN_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Day of the week, in the order used to index `CalendarDate::day_of_week`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays, starting at Sunday (index 0)
    pub const ALL: [Self; DAYS_IN_WEEK] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday at `index` modulo 7, so any count of days maps to a weekday.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % DAYS_IN_WEEK]
    }

    /// Returns the position of this weekday in `Weekday::ALL`
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

// Helper functions

/// Returns true for Gregorian leap years.
///
/// Defined for any year, including years before `MIN_YEAR`.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Returns the number of days in `month` of `year`, or 0 if `month` is not in `1..=12`.
pub const fn days_in_month(month: u8, year: i32) -> u8 {
    if month == 0 || month > MAX_MONTH {
        return 0;
    }

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Returns 366 for leap years and 365 otherwise.
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        DAYS_LEAP_YEAR
    } else {
        DAYS_YEAR
    }
}

/// Checks whether `(month, day, year)` names a real date no earlier than January 1, `MIN_YEAR`.
pub const fn is_valid_date(month: u8, day: u8, year: i32) -> bool {
    if year < MIN_YEAR {
        return false;
    }
    if month == 0 || month > MAX_MONTH {
        return false;
    }
    day >= MIN_DAY && day <= days_in_month(month, year)
}

// Day numbers count days since January 1, MIN_YEAR (day 0).
// Conversions follow Howard Hinnant's civil calendar algorithms.

const DAYS_PER_ERA: i64 = 146_097;

const fn days_from_civil_epoch(year: i32, month: u8, day: u8) -> i64 {
    let y = if month <= FEBRUARY { year as i64 - 1 } else { year as i64 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let m = month as i64;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe
}

const EPOCH: i64 = days_from_civil_epoch(MIN_YEAR, 1, 1);

/// Day number of the last representable date, December 31 of `i32::MAX`.
pub(crate) const MAX_DAY_NUMBER: i64 = days_from_civil_epoch(i32::MAX, 12, 31) - EPOCH;

pub(crate) const fn day_number(month: u8, day: u8, year: i32) -> i64 {
    days_from_civil_epoch(year, month, day) - EPOCH
}

/// Inverse of `day_number`. Callers keep `days` within `0..=MAX_DAY_NUMBER`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn civil_from_day_number(days: i64) -> (u8, u8, i32) {
    debug_assert!(days >= 0 && days <= MAX_DAY_NUMBER);

    let z = days + EPOCH;
    let era = if z >= 0 { z } else { z - (DAYS_PER_ERA - 1) } / DAYS_PER_ERA;
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / (DAYS_PER_ERA - 1)) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if m <= 2 { y + 1 } else { y };
    (m as u8, d as u8, year as i32)
}
