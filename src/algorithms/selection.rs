//! Result of a selection algorithm.

use crate::block::Block;

/// A chosen subset of blocks together with its total weight.
///
/// `chosen` holds placed blocks: coordinates are the ones the feasibility
/// oracle settled on, not the nominal ones. Forbidden zones and other
/// zero-weight blocks never appear in it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub weight: f64,
    pub chosen: Vec<Block>,
}

impl Selection {
    /// The empty selection: weight zero, nothing chosen.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a selection from an oracle placement, dropping zero-weight
    /// blocks. The weight is summed over the kept blocks.
    pub(crate) fn from_placement(placed: Vec<Block>) -> Self {
        let chosen: Vec<Block> = placed.into_iter().filter(|b| b.weight() > 0.0).collect();
        let weight = chosen.iter().map(Block::weight).sum();
        Self { weight, chosen }
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Chosen blocks sorted by placed start.
    pub fn sorted_by_start(&self) -> Vec<Block> {
        let mut blocks = self.chosen.clone();
        blocks.sort_by(|a, b| a.start().total_cmp(&b.start()));
        blocks
    }
}
