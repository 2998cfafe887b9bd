//! Priority-queue shortest paths.

use std::collections::{BinaryHeap, HashSet};

use optiroute_core::GridNetwork;

use super::{Frontier, PathTree};

/// Compute least-cost paths from `source` to every node.
///
/// Standard relaxation over a binary heap; equal-cost ties settle in
/// insertion order. The explored counter reports the number of nodes
/// permanently settled.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use optiroute_core::{GridNetwork, Location, LocationKind};
/// use optiroute_engine::shortest_path::dijkstra;
///
/// let network = GridNetwork::new(&[
///     Location::new("W1", "Depot", Coord { x: 0, y: 0 }, LocationKind::Warehouse),
///     Location::new("D1", "Shop", Coord { x: 3, y: 4 }, LocationKind::Delivery),
/// ]);
/// let tree = dijkstra(&network, 0);
/// assert_eq!(tree.distance_to(1), Some(10.0));
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "path costs accumulate edge weights")]
pub fn dijkstra(network: &GridNetwork, source: usize) -> PathTree {
    let mut tree = PathTree::new(source);
    let mut settled = HashSet::new();
    let mut heap = BinaryHeap::new();
    let mut sequence = 0_u64;
    heap.push(Frontier {
        cost: 0.0,
        order: sequence,
        node: source,
    });

    while let Some(Frontier { cost, node, .. }) = heap.pop() {
        if !settled.insert(node) {
            continue;
        }
        tree.explored += 1;

        for next in network.nodes() {
            if next == node || settled.contains(&next) {
                continue;
            }
            let candidate = cost + network.distance(node, next);
            if tree.distance_to(next).is_none_or(|best| candidate < best) {
                tree.distances.insert(next, candidate);
                tree.predecessors.insert(next, node);
                sequence += 1;
                heap.push(Frontier {
                    cost: candidate,
                    order: sequence,
                    node: next,
                });
            }
        }
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use optiroute_core::{Location, LocationKind};
    use rstest::rstest;

    fn network(coords: &[(i32, i32)]) -> GridNetwork {
        let locations: Vec<Location> = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| {
                Location::new(format!("L{i}"), "node", Coord { x, y }, LocationKind::Delivery)
            })
            .collect();
        GridNetwork::new(&locations)
    }

    #[rstest]
    fn settles_every_node_of_a_complete_graph() {
        let grid = network(&[(0, 0), (1, 0), (0, 1), (4, 4)]);
        let tree = dijkstra(&grid, 0);
        assert_eq!(tree.explored(), 4);
        for node in grid.nodes() {
            assert!(tree.distance_to(node).is_some());
        }
    }

    #[rstest]
    fn source_distance_is_zero() {
        let grid = network(&[(2, 3), (5, 5)]);
        let tree = dijkstra(&grid, 1);
        assert_eq!(tree.distance_to(1), Some(0.0));
        assert_eq!(tree.source(), 1);
    }

    #[rstest]
    fn direct_edge_is_the_shortest_path_under_the_triangle_inequality() {
        let grid = network(&[(0, 0), (1, 1), (2, 2)]);
        let tree = dijkstra(&grid, 0);
        let direct = grid.distance(0, 2);
        let reported = tree.distance_to(2).expect("reachable");
        assert!((reported - direct).abs() < 1e-9);
        assert_eq!(tree.path_to(2), Some(vec![0, 2]));
    }
}
