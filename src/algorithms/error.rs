use thiserror::Error;

/// Errors reported by the selection algorithms before any search starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    #[error("Exhaustive search supports at most {max} blocks, got {got}")]
    TooManyBlocks { got: usize, max: usize },

    #[error("Temperature must be finite and non-negative, got {0}")]
    InvalidTemperature(f64),
}
