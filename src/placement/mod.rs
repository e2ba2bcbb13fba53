//! Order-preserving placement of flexible blocks.
//!
//! Given blocks in a fixed order, [`fits_in_order`] decides in linear time
//! whether they can be laid out left to right, each inside its own slack
//! window, without interior overlap. The greedy never revisits an earlier
//! block, so failure only rules out the given order, not the block set.

use crate::block::Block;

/// Places `blocks` left to right in the given order, rewriting their
/// coordinates in place.
///
/// The first block goes to its earliest start. Every later block goes to
/// `max(frontier, earliest_start)`, where `frontier` is the end of the block
/// placed before it; if its latest start is left of the frontier, no
/// order-preserving placement exists.
///
/// Returns `true` when every block was placed. On `false` the slice is left
/// partially rewritten and must be discarded, so pass a working copy, never
/// caller-owned data that is still needed.
pub fn fits_in_order(blocks: &mut [Block]) -> bool {
    let Some((first, rest)) = blocks.split_first_mut() else {
        return true;
    };

    let earliest = first.earliest_start();
    first.shift_to(earliest);
    let mut frontier = first.end();

    for block in rest {
        if block.latest_start() < frontier {
            return false;
        }
        let start = frontier.max(block.earliest_start());
        block.shift_to(start);
        frontier = block.end();
    }
    true
}

/// Consumes a working copy and returns it placed, or `None` if the order
/// admits no placement.
pub fn place_in_order(mut blocks: Vec<Block>) -> Option<Vec<Block>> {
    if fits_in_order(&mut blocks) {
        Some(blocks)
    } else {
        None
    }
}

/// Returns true if no two blocks overlap (open intervals, touching allowed).
pub fn is_disjoint(blocks: &[Block]) -> bool {
    let mut spans: Vec<(f64, f64)> = blocks.iter().map(|b| (b.start(), b.end())).collect();
    spans.sort_by(|a, b| a.0.total_cmp(&b.0));
    spans.windows(2).all(|w| w[0].1 <= w[1].0)
}
