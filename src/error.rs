/// Error type for date construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The month, day, and year do not name a date on or after January 1, 1753.
    #[error("invalid date: {month}/{day}/{year}")]
    InvalidDate { month: u8, day: u8, year: i32 },
}
