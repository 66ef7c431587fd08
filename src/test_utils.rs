//! Shorthand constructors for unit tests.

use crate::CalendarDate;

/// Builds a date that the test knows to be valid.
pub fn date(month: u8, day: u8, year: i32) -> CalendarDate {
    CalendarDate::new(month, day, year)
        .unwrap_or_else(|err| panic!("test date {month}/{day}/{year} should be valid: {err}"))
}

/// Steps one day at a time with `next_date`/`prev_date`, the reference the
/// closed-form arithmetic is checked against.
pub fn walk(start: CalendarDate, n: i64) -> CalendarDate {
    let mut current = start;
    if n < 0 {
        for _ in n..0 {
            current = current.prev_date();
        }
    } else {
        for _ in 0..n {
            current = current.next_date();
        }
    }
    current
}
