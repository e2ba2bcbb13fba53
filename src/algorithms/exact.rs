//! Exhaustive subset search.

use tracing::debug;

use super::error::SolveError;
use super::selection::Selection;
use crate::block::Block;
use crate::feasibility::check_feasibility;
use crate::placement::is_disjoint;
use crate::zones::merge_disjoint;

/// Counters collected by [`ExactSolver::solve_with_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactStats {
    pub subsets_examined: u64,
    pub feasible_subsets: u64,
}

/// Exact solver: scores every subset of the blocks with the feasibility
/// oracle and keeps the heaviest feasible one.
///
/// Runs in Θ(2^N) oracle calls, so it is meant for inputs of a few tens of
/// blocks at most. Among equally heavy subsets the first one found wins; which
/// one that is depends on the enumeration order and is not part of the
/// contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSolver;

impl ExactSolver {
    /// Largest block count accepted. Enumeration does not depend on it, but
    /// 2^63 subsets is already far past any run that could finish, and the
    /// counters in [`ExactStats`] stay exact below it.
    pub const MAX_BLOCKS: usize = 63;

    pub fn new() -> Self {
        Self
    }

    /// Returns a maximum-weight feasible subset of `blocks` that avoids every
    /// zone in `forbidden`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::TooManyBlocks`] if `blocks` has more than
    /// [`MAX_BLOCKS`](Self::MAX_BLOCKS) entries.
    pub fn solve(&self, blocks: &[Block], forbidden: &[Block]) -> Result<Selection, SolveError> {
        self.solve_with_stats(blocks, forbidden)
            .map(|(selection, _)| selection)
    }

    /// Like [`solve`](Self::solve), also returning search counters.
    pub fn solve_with_stats(
        &self,
        blocks: &[Block],
        forbidden: &[Block],
    ) -> Result<(Selection, ExactStats), SolveError> {
        if blocks.len() > Self::MAX_BLOCKS {
            return Err(SolveError::TooManyBlocks {
                got: blocks.len(),
                max: Self::MAX_BLOCKS,
            });
        }
        let mut stats = ExactStats::default();
        if blocks.is_empty() {
            return Ok((Selection::empty(), stats));
        }

        let zones = merge_disjoint(forbidden);
        debug!(
            blocks = blocks.len(),
            zones = zones.len(),
            "starting exhaustive search"
        );

        let mut best = Selection::empty();
        let mut mask = vec![false; blocks.len()];
        loop {
            stats.subsets_examined += 1;

            let mut candidate: Vec<Block> = Vec::with_capacity(blocks.len() + zones.len());
            let mut weight = 0.0;
            for (block, _) in blocks.iter().zip(&mask).filter(|(_, chosen)| **chosen) {
                candidate.push(*block);
                weight += block.weight();
            }
            candidate.extend_from_slice(&zones);

            if let Some(placed) = check_feasibility(&candidate, None).into_placement() {
                debug_assert!(is_disjoint(&placed));
                stats.feasible_subsets += 1;
                if weight > best.weight {
                    best = Selection::from_placement(placed);
                }
            }

            if !next_subset(&mut mask) {
                break;
            }
        }

        debug!(
            weight = best.weight,
            chosen = best.len(),
            examined = stats.subsets_examined,
            feasible = stats.feasible_subsets,
            "exhaustive search finished"
        );
        Ok((best, stats))
    }
}

/// Advances `mask` to the next subset, treating it as a little-endian binary
/// counter. Returns `false` once every subset has been visited.
fn next_subset(mask: &mut [bool]) -> bool {
    for bit in mask.iter_mut() {
        if *bit {
            *bit = false;
        } else {
            *bit = true;
            return true;
        }
    }
    false
}
