//! Heuristic-guided shortest path to a single target.

use std::collections::{BinaryHeap, HashSet};

use optiroute_core::GridNetwork;

use super::{Frontier, PathTree};

/// Compute the least-cost path from `source` to `target`.
///
/// Dijkstra augmented with an admissible heuristic: the straight-line
/// distance to the target, which is exactly the edge metric and therefore
/// never overestimates. The search stops once the target settles, so the
/// returned tree is exact for settled nodes and holds best-known estimates
/// for the rest. The explored counter reports frontier pops.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use optiroute_core::{GridNetwork, Location, LocationKind};
/// use optiroute_engine::shortest_path::astar;
///
/// let network = GridNetwork::new(&[
///     Location::new("W1", "Depot", Coord { x: 0, y: 0 }, LocationKind::Warehouse),
///     Location::new("D1", "Near", Coord { x: 1, y: 0 }, LocationKind::Delivery),
///     Location::new("D2", "Far", Coord { x: 5, y: 5 }, LocationKind::Delivery),
/// ]);
/// let tree = astar(&network, 0, 1);
/// assert_eq!(tree.distance_to(1), Some(2.0));
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "path costs accumulate edge weights plus the heuristic"
)]
pub fn astar(network: &GridNetwork, source: usize, target: usize) -> PathTree {
    let mut tree = PathTree::new(source);
    let mut settled = HashSet::new();
    let mut heap = BinaryHeap::new();
    let mut sequence = 0_u64;
    heap.push(Frontier {
        cost: network.distance(source, target),
        order: sequence,
        node: source,
    });

    while let Some(Frontier { node, .. }) = heap.pop() {
        if !settled.insert(node) {
            continue;
        }
        tree.explored += 1;
        if node == target {
            break;
        }
        let Some(through) = tree.distance_to(node) else {
            continue;
        };

        for next in network.nodes() {
            if next == node || settled.contains(&next) {
                continue;
            }
            let candidate = through + network.distance(node, next);
            if tree.distance_to(next).is_none_or(|best| candidate < best) {
                tree.distances.insert(next, candidate);
                tree.predecessors.insert(next, node);
                sequence += 1;
                heap.push(Frontier {
                    cost: candidate + network.distance(next, target),
                    order: sequence,
                    node: next,
                });
            }
        }
    }

    tree
}
