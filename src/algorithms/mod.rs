pub mod annealing;
pub mod error;
pub mod exact;
pub mod selection;

pub use annealing::{AnnealingConfig, AnnealingSolver, SearchStats, Temperature};
pub use error::SolveError;
pub use exact::{ExactSolver, ExactStats};
pub use selection::Selection;

use rand::Rng;

use crate::block::Block;

/// Algorithm for choosing a heavy, placeable subset of blocks.
///
/// # Arguments
///
/// * `blocks` - Candidate blocks; never modified
/// * `forbidden` - Zones no placed block may overlap, in any form (they are
///   normalized internally)
/// * `rng` - Source of randomness; deterministic algorithms ignore it
///
/// # Returns
///
/// A [`Selection`] whose blocks carry their placed coordinates.
pub trait SelectionAlgorithm {
    fn select<R: Rng + ?Sized>(
        &self,
        blocks: &[Block],
        forbidden: &[Block],
        rng: &mut R,
    ) -> Result<Selection, SolveError>;

    fn name(&self) -> &str;
}

impl SelectionAlgorithm for ExactSolver {
    fn select<R: Rng + ?Sized>(
        &self,
        blocks: &[Block],
        forbidden: &[Block],
        _rng: &mut R,
    ) -> Result<Selection, SolveError> {
        self.solve(blocks, forbidden)
    }

    fn name(&self) -> &str {
        "exact"
    }
}

impl SelectionAlgorithm for AnnealingSolver {
    fn select<R: Rng + ?Sized>(
        &self,
        blocks: &[Block],
        forbidden: &[Block],
        rng: &mut R,
    ) -> Result<Selection, SolveError> {
        self.solve(blocks, forbidden, rng)
    }

    fn name(&self) -> &str {
        "annealing"
    }
}
