//! Configuration for the annealing selection search.

use crate::algorithms::SolveError;
use crate::block::Block;

/// Temperature used by the acceptance test.
///
/// Higher temperatures accept weight-losing toggles more often (more
/// exploration); zero turns the search into pure hill climbing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Temperature {
    /// [`AUTO_FACTOR`](Temperature::AUTO_FACTOR) times the mean block weight.
    #[default]
    Auto,
    /// A fixed, non-negative temperature.
    Fixed(f64),
}

impl Temperature {
    /// Empirical scale for [`Temperature::Auto`]; carries no optimality claim.
    pub const AUTO_FACTOR: f64 = 0.07;

    /// Resolves the temperature for a concrete block list.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidTemperature`] for a negative or
    /// non-finite fixed value.
    pub fn resolve(&self, blocks: &[Block]) -> Result<f64, SolveError> {
        match *self {
            Temperature::Auto if blocks.is_empty() => Ok(0.0),
            Temperature::Auto => {
                let total: f64 = blocks.iter().map(Block::weight).sum();
                Ok(Self::AUTO_FACTOR * total / blocks.len() as f64)
            }
            Temperature::Fixed(t) if t.is_finite() && t >= 0.0 => Ok(t),
            Temperature::Fixed(t) => Err(SolveError::InvalidTemperature(t)),
        }
    }
}

/// Parameters of [`AnnealingSolver`](super::AnnealingSolver).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnnealingConfig {
    /// Number of toggle proposals; the search always runs exactly this many.
    pub iterations: usize,
    /// Topological orders the oracle may try per proposal. Proposals whose
    /// feasibility is not established within this budget are discarded.
    pub search_budget: usize,
    /// Constant temperature for the whole run.
    pub temperature: Temperature,
}

impl AnnealingConfig {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_search_budget(mut self, search_budget: usize) -> Self {
        self.search_budget = search_budget;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Temperature::Fixed(temperature);
        self
    }
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            iterations: 1024,
            search_budget: 64,
            temperature: Temperature::Auto,
        }
    }
}
