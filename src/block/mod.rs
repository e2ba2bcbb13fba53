//! Weighted intervals with a flexible placement window.

pub mod error;

mod flexible;
pub use flexible::Block;

pub use error::BlockError;
