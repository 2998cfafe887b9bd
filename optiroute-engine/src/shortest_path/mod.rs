//! Shortest-path algorithms over the dispatch network.
//!
//! All three algorithms operate on the implicit complete graph exposed by
//! [`GridNetwork`](optiroute_core::GridNetwork) and return a [`PathTree`]:
//! a distance map from the source, a predecessor map for path
//! reconstruction, and a work counter for comparative instrumentation.
//! Unreachable nodes are absent from the distance map — absence is the
//! signal, never an error.

mod astar;
mod bellman_ford;
mod dijkstra;

pub use astar::astar;
pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;

use std::cmp::Ordering;
use std::collections::HashMap;

/// Least-cost paths from a single source node.
#[derive(Debug, Clone)]
pub struct PathTree {
    source: usize,
    distances: HashMap<usize, f64>,
    predecessors: HashMap<usize, usize>,
    explored: u64,
}

impl PathTree {
    fn new(source: usize) -> Self {
        Self {
            source,
            distances: HashMap::from([(source, 0.0)]),
            predecessors: HashMap::new(),
            explored: 0,
        }
    }

    /// The source node the tree was grown from.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance from the source to `node`, or `None` when unreachable.
    #[must_use]
    pub fn distance_to(&self, node: usize) -> Option<f64> {
        self.distances.get(&node).copied()
    }

    /// The full distance map, keyed by node index.
    #[must_use]
    pub fn distances(&self) -> &HashMap<usize, f64> {
        &self.distances
    }

    /// Work counter for comparative instrumentation.
    ///
    /// The unit is algorithm-specific: settled nodes for Dijkstra, frontier
    /// pops for A*, improving relaxations for Bellman-Ford.
    #[must_use]
    pub fn explored(&self) -> u64 {
        self.explored
    }

    /// Reconstruct the node sequence from the source to `node`.
    ///
    /// Returns `None` when `node` was never reached.
    #[must_use]
    pub fn path_to(&self, node: usize) -> Option<Vec<usize>> {
        if !self.distances.contains_key(&node) {
            return None;
        }
        let mut path = vec![node];
        let mut current = node;
        while current != self.source {
            current = self.predecessors.get(&current).copied()?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

/// Frontier entry for the heap-based algorithms.
///
/// Ordered as a min-heap on cost with insertion order as the tie-break, so
/// equal-cost nodes settle first-in first-out.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frontier {
    cost: f64,
    order: u64,
    node: usize,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed comparison turns the max-heap into a min-heap.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
