//! Error types for recurrence generation.

use thiserror::Error;

/// Errors that can occur while generating occurrence dates.
#[derive(Error, Debug)]
pub enum RecurError {
    /// The input string was not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The repeat interval was below 1.
    #[error("Invalid interval {0}: must be at least 1")]
    InvalidInterval(u32),

    /// The supplied end bound precedes the start date.
    #[error("End date {end} is before start date {start}")]
    EndBeforeStart { start: String, end: String },

    /// Date arithmetic left the representable calendar range.
    #[error("Date arithmetic out of range")]
    OutOfRange,
}

/// Convenience alias used throughout recur-engine.
pub type Result<T> = std::result::Result<T, RecurError>;
