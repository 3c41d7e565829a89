//! Error types for room-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoomError {
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A time window whose start is not strictly before its end.
    #[error("Invalid window: start {start} must be before end {end}")]
    InvalidWindow { start: u16, end: u16 },

    /// An occupancy log line that could not be decoded into a record.
    /// `line` is 1-based.
    #[error("Occupancy log error at line {line}: {message}")]
    Decode { line: usize, message: String },

    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoomError>;
