use thiserror::Error;

/// Reasons a block cannot be constructed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BlockError {
    #[error("Block coordinates must be finite, got start={start}, end={end}")]
    NonFiniteBounds { start: f64, end: f64 },

    #[error("Block start must be strictly less than end, got [{start}, {end})")]
    EmptySpan { start: f64, end: f64 },

    #[error("Block slack must be finite and non-negative, got {0}")]
    InvalidSlack(f64),

    #[error("Block weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),
}
