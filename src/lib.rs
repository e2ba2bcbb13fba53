//! slackpack - weighted interval packing with flexible placement
//!
//! Each [`Block`](block::Block) is an interval `[start, end)` that may slide
//! by up to its slack in either direction and carries a non-negative weight.
//! Given blocks and a set of immovable forbidden zones, the crate finds a
//! heavy subset of blocks that can be placed, each within its own slack,
//! without overlapping one another or any zone.
//!
//! Two selection algorithms share one feasibility oracle:
//!
//! - [`ExactSolver`](algorithms::ExactSolver) enumerates every subset and is
//!   meant for small inputs.
//! - [`AnnealingSolver`](algorithms::AnnealingSolver) runs a stochastic
//!   toggle search that scales to larger inputs at the cost of optimality.

pub mod algorithms;
pub mod block;
pub mod feasibility;
pub mod placement;
pub mod zones;

pub use algorithms::{AnnealingConfig, Selection, SelectionAlgorithm, SolveError};
pub use block::{Block, BlockError};
pub use feasibility::is_feasible;
pub use placement::fits_in_order;
pub use zones::merge_disjoint;

/// Maximum-weight feasible subset by exhaustive search.
///
/// Shorthand for [`ExactSolver::solve`](algorithms::ExactSolver::solve).
pub fn solve_exact(blocks: &[Block], forbidden: &[Block]) -> Result<Selection, SolveError> {
    algorithms::ExactSolver::new().solve(blocks, forbidden)
}

/// Heavy feasible subset by annealing search.
///
/// Shorthand for [`AnnealingSolver::solve`](algorithms::AnnealingSolver::solve).
pub fn solve_approx<R: rand::Rng + ?Sized>(
    blocks: &[Block],
    forbidden: &[Block],
    config: AnnealingConfig,
    rng: &mut R,
) -> Result<Selection, SolveError> {
    algorithms::AnnealingSolver::new(config).solve(blocks, forbidden, rng)
}
