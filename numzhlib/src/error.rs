//! Single error type of the public API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NumZhError {
    #[error("invalid number format: {0}")]
    InvalidNumberFormat(String),

    /// A non-zero digit sits above the highest supported place value.
    #[error("overflow: digit at position {position} needs a unit beyond 兆")]
    Overflow { position: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl NumZhError {
    pub(crate) fn invalid(input: &str) -> Self {
        NumZhError::InvalidNumberFormat(format!("{input:?}"))
    }
}

pub type Result<T> = std::result::Result<T, NumZhError>;
