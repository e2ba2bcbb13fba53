//! Feasibility oracle for unordered block sets.
//!
//! A set of blocks is feasible if some assignment of offsets, each within its
//! block's slack, leaves all blocks pairwise non-overlapping. A single sort by
//! start is not enough to decide this: when three or more slack windows
//! overlap, the block that should go first is genuinely ambiguous.
//!
//! The oracle works in three stages:
//!
//! 1. **Precedence**: build a [`PrecedenceGraph`] whose edges are orderings
//!    every feasible placement must respect. A pair that must precede each
//!    other proves infeasibility immediately, as does any cycle.
//! 2. **Enumeration**: walk the topological orders of that graph lazily with
//!    [`TopologicalOrders`], never materializing more than one at a time.
//! 3. **Placement**: run the linear greedy
//!    ([`fits_in_order`](crate::placement::fits_in_order)) on a fresh copy
//!    for each order and stop at the first success.
//!
//! Each tried order consumes one unit of the optional search budget. Running
//! out of budget is reported as infeasible. The oracle can therefore return
//! false negatives, but never a false positive: every success carries a
//! concrete placement.
//!
//! # Module Structure
//!
//! - [`precedence`] - precedence graph construction
//! - [`orders`] - lazy topological-order enumeration

pub mod orders;
pub mod precedence;

use tracing::trace;

use crate::block::Block;
use crate::placement::place_in_order;

pub use orders::TopologicalOrders;
pub use precedence::{MutualPrecedence, PrecedenceGraph};

/// Why a block set was reported infeasible.
///
/// Only the first three are proofs. [`BudgetExhausted`](Self::BudgetExhausted)
/// means the search stopped early; callers that only need a yes/no answer
/// treat all four alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfeasibleReason {
    /// Two blocks would each have to precede the other.
    MutualPrecedence(MutualPrecedence),
    /// The precedence graph contains a cycle.
    PrecedenceCycle,
    /// Every admissible order was tried and none could be placed.
    NoOrderFits { orders_tried: usize },
    /// The search budget ran out before a placement was found.
    BudgetExhausted { orders_tried: usize },
}

/// Outcome of a feasibility check.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// A concrete placement, in the order that produced it.
    Feasible(Vec<Block>),
    Infeasible(InfeasibleReason),
}

impl Verdict {
    /// Returns the placement, if any.
    pub fn into_placement(self) -> Option<Vec<Block>> {
        match self {
            Verdict::Feasible(placed) => Some(placed),
            Verdict::Infeasible(_) => None,
        }
    }
}

/// Decides whether `blocks` admit a non-overlapping placement and reports why
/// not when they don't.
///
/// `blocks` should already include any forbidden zones (see
/// [`merge_disjoint`](crate::zones::merge_disjoint)). `budget` caps the number
/// of topological orders tried; `None` tries them all. The input is never
/// modified.
pub fn check_feasibility(blocks: &[Block], budget: Option<usize>) -> Verdict {
    if blocks.is_empty() {
        return Verdict::Feasible(Vec::new());
    }

    let graph = match PrecedenceGraph::build(blocks) {
        Ok(graph) => graph,
        Err(conflict) => {
            trace!(
                first = conflict.first,
                second = conflict.second,
                "mutual precedence"
            );
            return Verdict::Infeasible(InfeasibleReason::MutualPrecedence(conflict));
        }
    };
    if graph.has_cycle() {
        trace!(blocks = blocks.len(), "precedence cycle");
        return Verdict::Infeasible(InfeasibleReason::PrecedenceCycle);
    }

    let mut orders_tried = 0usize;
    for order in graph.orders() {
        if budget.is_some_and(|limit| orders_tried >= limit) {
            trace!(blocks = blocks.len(), orders_tried, "search budget exhausted");
            return Verdict::Infeasible(InfeasibleReason::BudgetExhausted { orders_tried });
        }
        orders_tried += 1;

        let working: Vec<Block> = order.iter().map(|&i| blocks[i]).collect();
        if let Some(placed) = place_in_order(working) {
            trace!(blocks = blocks.len(), orders_tried, "feasible order found");
            return Verdict::Feasible(placed);
        }
    }

    trace!(blocks = blocks.len(), orders_tried, "no admissible order fits");
    Verdict::Infeasible(InfeasibleReason::NoOrderFits { orders_tried })
}

/// Returns a non-overlapping placement of `blocks`, or `None` if none was
/// found within `budget` topological orders.
///
/// See [`check_feasibility`] for the reason behind a `None`.
pub fn is_feasible(blocks: &[Block], budget: Option<usize>) -> Option<Vec<Block>> {
    check_feasibility(blocks, budget).into_placement()
}
