//! Precedence graph derived from slack windows.

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::block::Block;

use super::orders::TopologicalOrders;

/// Two blocks that would each have to precede the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutualPrecedence {
    pub first: usize,
    pub second: usize,
}

/// Required relative order between blocks.
///
/// Node weights are block positions in the slice the graph was built from.
/// An edge `k → l` means block `k` must end no later than block `l` begins in
/// every feasible placement: even fully left-shifted, `l` ends after the
/// latest possible start of `k`, so `l` can never sit entirely before `k`.
///
/// # Invariants
///
/// - Node `i` of the graph is block `i` of the source slice.
/// - No pair of nodes is joined in both directions; [`build`](Self::build)
///   reports such a pair instead of constructing the graph.
#[derive(Debug, Clone)]
pub struct PrecedenceGraph {
    graph: DiGraph<usize, ()>,
}

impl PrecedenceGraph {
    /// Builds the precedence graph for `blocks`.
    ///
    /// # Errors
    ///
    /// Returns the first [`MutualPrecedence`] found, which proves that no
    /// ordering of the blocks can be placed.
    pub fn build(blocks: &[Block]) -> Result<Self, MutualPrecedence> {
        let mut graph = DiGraph::with_capacity(blocks.len(), blocks.len());
        let nodes: Vec<NodeIndex> = (0..blocks.len()).map(|i| graph.add_node(i)).collect();

        for (i, a) in blocks.iter().enumerate() {
            for (j, b) in blocks.iter().enumerate().skip(i + 1) {
                let a_first = b.earliest_end() > a.latest_start();
                let b_first = a.earliest_end() > b.latest_start();
                match (a_first, b_first) {
                    (true, true) => {
                        return Err(MutualPrecedence {
                            first: i,
                            second: j,
                        })
                    }
                    (true, false) => {
                        graph.add_edge(nodes[i], nodes[j], ());
                    }
                    (false, true) => {
                        graph.add_edge(nodes[j], nodes[i], ());
                    }
                    (false, false) => {}
                }
            }
        }
        Ok(Self { graph })
    }

    /// Returns true if the graph has a directed cycle.
    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Returns true if block `before` must precede block `after`.
    pub fn must_precede(&self, before: usize, after: usize) -> bool {
        self.graph
            .find_edge(NodeIndex::new(before), NodeIndex::new(after))
            .is_some()
    }

    /// Successor lists indexed by block position.
    pub fn successors(&self) -> Vec<Vec<usize>> {
        self.graph
            .node_indices()
            .map(|node| {
                self.graph
                    .neighbors_directed(node, Direction::Outgoing)
                    .map(|succ| self.graph[succ])
                    .collect()
            })
            .collect()
    }

    /// Lazily enumerates the topological orders of the graph.
    pub fn orders(&self) -> TopologicalOrders {
        TopologicalOrders::new(self.successors())
    }

    pub fn block_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
