//! Counters collected during an annealing run.

/// Per-run statistics of [`AnnealingSolver`](super::AnnealingSolver).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStats {
    /// Iterations executed.
    pub iterations: usize,
    /// Proposals that passed the acceptance test and reached the oracle.
    pub proposals_checked: usize,
    /// Proposals rejected by the acceptance test.
    pub rejected_by_temperature: usize,
    /// Proposals rejected because feasibility was not established.
    pub rejected_infeasible: usize,
    /// Times the best-found weight increased.
    pub improvements: usize,
    /// Best-found weight after each iteration.
    pub best_trajectory: Vec<f64>,
}

impl SearchStats {
    pub(crate) fn with_capacity(iterations: usize) -> Self {
        Self {
            best_trajectory: Vec::with_capacity(iterations),
            ..Self::default()
        }
    }

    /// Proposals committed as the new current subset.
    pub fn accepted(&self) -> usize {
        self.proposals_checked - self.rejected_infeasible
    }

    /// Fraction of oracle calls that came back infeasible.
    pub fn infeasible_rate(&self) -> f64 {
        if self.proposals_checked == 0 {
            0.0
        } else {
            self.rejected_infeasible as f64 / self.proposals_checked as f64
        }
    }

    /// Best-found weight at the end of the run.
    pub fn final_best(&self) -> f64 {
        self.best_trajectory.last().copied().unwrap_or(0.0)
    }
}
