//! Iterative edge relaxation.

use optiroute_core::GridNetwork;

use super::PathTree;

/// Compute least-cost paths from `source` by repeated edge relaxation.
///
/// Runs up to `|V| - 1` rounds over every directed edge of the implicit
/// complete graph, stopping early once a round improves nothing. The
/// Euclidean construction never yields negative weights, but the algorithm
/// is kept in its general negative-weight-tolerant form so its
/// instrumentation stays meaningful next to the heap-based searches: the
/// explored counter reports relaxation attempts that improved a distance.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use optiroute_core::{GridNetwork, Location, LocationKind};
/// use optiroute_engine::shortest_path::bellman_ford;
///
/// let network = GridNetwork::new(&[
///     Location::new("W1", "Depot", Coord { x: 0, y: 0 }, LocationKind::Warehouse),
///     Location::new("D1", "Shop", Coord { x: 0, y: 3 }, LocationKind::Delivery),
/// ]);
/// let tree = bellman_ford(&network, 0);
/// assert_eq!(tree.distance_to(1), Some(6.0));
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "path costs accumulate edge weights")]
pub fn bellman_ford(network: &GridNetwork, source: usize) -> PathTree {
    let mut tree = PathTree::new(source);
    let rounds = network.node_count().saturating_sub(1);

    for _ in 0..rounds {
        let mut improved = false;
        for from in network.nodes() {
            let Some(through) = tree.distance_to(from) else {
                continue;
            };
            for to in network.nodes() {
                if to == from {
                    continue;
                }
                let candidate = through + network.distance(from, to);
                if tree.distance_to(to).is_none_or(|best| candidate < best) {
                    tree.distances.insert(to, candidate);
                    tree.predecessors.insert(to, from);
                    tree.explored += 1;
                    improved = true;
                }
            }
        }
        if !improved {
            break;
        }
    }

    tree
}
