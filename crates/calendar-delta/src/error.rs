//! Error types for calendar-delta input normalization.
//!
//! These never escape the public delta operations, which absorb them into a
//! neutral result. They are exposed for callers that parse dates directly.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeltaError {
    #[error("No date given")]
    Absent,

    #[error("Invalid date: {0}")]
    InvalidText(String),

    #[error("Timestamp out of range: {0}ms")]
    TimestampOutOfRange(i64),

    #[error("Calendar arithmetic out of range")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, DeltaError>;
