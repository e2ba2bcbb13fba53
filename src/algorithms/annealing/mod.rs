//! Stochastic subset search guided by the feasibility oracle.
//!
//! The search keeps a current subset (initially empty) and, once per
//! iteration, proposes toggling one uniformly chosen block in or out:
//!
//! 1. **Acceptance**: a toggle that does not lose weight is always taken; one
//!    that loses `Δ` is taken with probability `exp(-Δ / T)` when `T > 0` and
//!    never when `T = 0` (the Metropolis criterion).
//! 2. **Feasibility**: an accepted toggle is checked by the oracle, together
//!    with the normalized forbidden zones, under the per-iteration search
//!    budget. If feasibility is not established the toggle is discarded and
//!    the iteration is spent without effect.
//! 3. **Commit**: otherwise the toggle becomes the current subset, and if it
//!    beats the best weight seen so far the oracle's placement is recorded.
//!
//! Temperature is constant for the whole run and the iteration count is
//! fixed; there is no convergence guarantee. Tight budgets make the oracle
//! report false negatives, which can hide feasible regions from the search
//! entirely. That tradeoff is left to the caller through
//! [`AnnealingConfig::search_budget`].
//!
//! # Module Structure
//!
//! - [`config`] - run parameters and temperature resolution
//! - [`stats`] - per-run counters and the best-weight trajectory

pub mod config;
pub mod stats;

use rand::Rng;
use tracing::{debug, trace};

use super::error::SolveError;
use super::selection::Selection;
use crate::block::Block;
use crate::feasibility::check_feasibility;
use crate::placement::is_disjoint;
use crate::zones::merge_disjoint;

pub use config::{AnnealingConfig, Temperature};
pub use stats::SearchStats;

/// Approximate solver based on constant-temperature single-block toggles.
#[derive(Debug, Clone, Default)]
pub struct AnnealingSolver {
    config: AnnealingConfig,
}

impl AnnealingSolver {
    pub fn new(config: AnnealingConfig) -> Self {
        Self { config }
    }

    /// Searches for a heavy feasible subset of `blocks` avoiding `forbidden`.
    ///
    /// All randomness comes from `rng`, so a seeded generator makes the run
    /// reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidTemperature`] for an invalid fixed
    /// temperature. Empty input short-circuits before the configuration is
    /// looked at.
    pub fn solve<R: Rng + ?Sized>(
        &self,
        blocks: &[Block],
        forbidden: &[Block],
        rng: &mut R,
    ) -> Result<Selection, SolveError> {
        self.solve_with_stats(blocks, forbidden, rng)
            .map(|(selection, _)| selection)
    }

    /// Like [`solve`](Self::solve), also returning run statistics.
    pub fn solve_with_stats<R: Rng + ?Sized>(
        &self,
        blocks: &[Block],
        forbidden: &[Block],
        rng: &mut R,
    ) -> Result<(Selection, SearchStats), SolveError> {
        if blocks.is_empty() {
            return Ok((Selection::empty(), SearchStats::default()));
        }
        let temperature = self.config.temperature.resolve(blocks)?;

        let zones = merge_disjoint(forbidden);
        let budget = Some(self.config.search_budget);
        debug!(
            blocks = blocks.len(),
            zones = zones.len(),
            iterations = self.config.iterations,
            search_budget = self.config.search_budget,
            temperature,
            "starting annealing search"
        );

        let mut stats = SearchStats::with_capacity(self.config.iterations);
        let mut current = vec![false; blocks.len()];
        let mut best = Selection::empty();

        for iteration in 0..self.config.iterations {
            stats.iterations += 1;

            let index = rng.gen_range(0..blocks.len());
            let delta = if current[index] {
                -blocks[index].weight()
            } else {
                blocks[index].weight()
            };

            if accepts(delta, temperature, rng) {
                stats.proposals_checked += 1;
                current[index] = !current[index];

                let mut candidate: Vec<Block> = blocks
                    .iter()
                    .zip(&current)
                    .filter(|(_, chosen)| **chosen)
                    .map(|(block, _)| *block)
                    .collect();
                let proposed_weight: f64 = candidate.iter().map(Block::weight).sum();
                candidate.extend_from_slice(&zones);

                match check_feasibility(&candidate, budget).into_placement() {
                    Some(placed) => {
                        debug_assert!(is_disjoint(&placed));
                        trace!(iteration, index, weight = proposed_weight, "toggle committed");
                        if proposed_weight > best.weight {
                            stats.improvements += 1;
                            best = Selection::from_placement(placed);
                            debug!(iteration, weight = best.weight, "new best subset");
                        }
                    }
                    None => {
                        current[index] = !current[index];
                        stats.rejected_infeasible += 1;
                    }
                }
            } else {
                stats.rejected_by_temperature += 1;
            }

            stats.best_trajectory.push(best.weight);
        }

        debug!(
            weight = best.weight,
            chosen = best.len(),
            improvements = stats.improvements,
            rejected_infeasible = stats.rejected_infeasible,
            "annealing search finished"
        );
        Ok((best, stats))
    }
}

/// Metropolis acceptance test for a weight change of `delta`.
fn accepts<R: Rng + ?Sized>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta >= 0.0 {
        return true;
    }
    temperature > 0.0 && rng.gen::<f64>() < (delta / temperature).exp()
}
