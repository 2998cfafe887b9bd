//! Orders deliveries into a single capacity-feasible round trip.
//!
//! Two sequencing modes back the algorithm selector: the shortest-path
//! algorithms share a canonical priority-then-distance order, while the
//! multi-stop solver runs a greedy nearest-feasible-next tour. Both skip
//! deliveries that would breach capacity rather than failing the request.

use std::collections::HashMap;

use optiroute_core::{Delivery, GridNetwork};

/// A delivery resolved to its node index in the network.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// The delivery to serve.
    pub delivery: &'a Delivery,
    /// Node index of the delivery's location.
    pub node: usize,
}

/// The admitted visiting order plus the sequencer's work counter.
#[derive(Debug, Clone)]
pub struct Sequence<'a> {
    /// Deliveries admitted to the route, in visiting order.
    pub stops: Vec<Candidate<'a>>,
    /// Feasibility evaluations performed while selecting stops.
    pub evaluations: u64,
}

/// Resolve deliveries to network nodes, excluding unresolvable references.
///
/// A delivery whose location is unknown is excluded from sequencing and
/// logged; it never fails the request.
pub fn resolve_candidates<'a>(
    network: &GridNetwork,
    deliveries: &'a [Delivery],
) -> Vec<Candidate<'a>> {
    deliveries
        .iter()
        .filter_map(|delivery| match network.index_of(&delivery.location) {
            Ok(node) => Some(Candidate { delivery, node }),
            Err(err) => {
                log::warn!("excluding delivery `{}` from sequencing: {err}", delivery.id);
                None
            }
        })
        .collect()
}

/// Order candidates for the single shortest-path algorithms.
///
/// The canonical rule: priority first (`High > Normal > Low`), then the
/// shortest-path distance from the source ascending, then delivery id
/// ascending. Candidates missing from the distance map are unreachable and
/// excluded. Deliveries are then admitted in that order, skipping any that
/// would push the cumulative load past `capacity`.
#[expect(clippy::float_arithmetic, reason = "cumulative load bookkeeping")]
pub fn canonical_order<'a>(
    candidates: &[Candidate<'a>],
    source_distances: &HashMap<usize, f64>,
    capacity: f64,
) -> Sequence<'a> {
    let mut reachable: Vec<Candidate<'a>> = candidates
        .iter()
        .filter(|candidate| {
            let known = source_distances.contains_key(&candidate.node);
            if !known {
                log::warn!(
                    "excluding delivery `{}`: location unreachable from source",
                    candidate.delivery.id
                );
            }
            known
        })
        .copied()
        .collect();

    reachable.sort_unstable_by(|lhs, rhs| {
        rhs.delivery
            .priority
            .cmp(&lhs.delivery.priority)
            .then_with(|| {
                let lhs_distance = source_distances.get(&lhs.node).copied().unwrap_or(f64::MAX);
                let rhs_distance = source_distances.get(&rhs.node).copied().unwrap_or(f64::MAX);
                lhs_distance
                    .partial_cmp(&rhs_distance)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then_with(|| lhs.delivery.id.cmp(&rhs.delivery.id))
    });

    let mut stops = Vec::with_capacity(reachable.len());
    let mut evaluations = 0_u64;
    let mut load = 0.0_f64;
    for candidate in reachable {
        evaluations += 1;
        if load + candidate.delivery.load > capacity {
            log::debug!(
                "skipping delivery `{}`: load {} exceeds remaining capacity",
                candidate.delivery.id,
                candidate.delivery.load
            );
            continue;
        }
        load += candidate.delivery.load;
        stops.push(candidate);
    }

    Sequence { stops, evaluations }
}

/// Greedy nearest-feasible-next tour for the multi-stop solver.
///
/// Starting from the source, repeatedly selects the unvisited delivery
/// that fits the remaining capacity and minimises the incremental distance
/// from the current position; ties break towards higher priority, then
/// lower delivery id. Deliveries that never fit are skipped and the tour
/// ends at the last feasible stop. This is a greedy approximation, not an
/// exact solver. The evaluation counter reports feasibility checks made by
/// the selection loop.
#[expect(
    clippy::float_arithmetic,
    reason = "incremental distance and load bookkeeping"
)]
pub fn nearest_feasible_tour<'a>(
    network: &GridNetwork,
    source: usize,
    candidates: &[Candidate<'a>],
    capacity: f64,
) -> Sequence<'a> {
    let mut remaining: Vec<Candidate<'a>> = candidates.to_vec();
    let mut stops = Vec::with_capacity(remaining.len());
    let mut evaluations = 0_u64;
    let mut position = source;
    let mut load = 0.0_f64;

    loop {
        let mut best: Option<(usize, f64)> = None;
        for (index, candidate) in remaining.iter().enumerate() {
            evaluations += 1;
            if load + candidate.delivery.load > capacity {
                continue;
            }
            let distance = network.distance(position, candidate.node);
            let closer = match best {
                None => true,
                Some((best_index, best_distance)) => {
                    if distance < best_distance {
                        true
                    } else if distance > best_distance {
                        false
                    } else {
                        remaining
                            .get(best_index)
                            .is_some_and(|incumbent| beats_on_ties(candidate, incumbent))
                    }
                }
            };
            if closer {
                best = Some((index, distance));
            }
        }

        let Some((index, _)) = best else {
            break;
        };
        if index >= remaining.len() {
            break;
        }
        let chosen = remaining.remove(index);
        load += chosen.delivery.load;
        position = chosen.node;
        stops.push(chosen);
    }

    for skipped in &remaining {
        log::debug!(
            "skipping delivery `{}`: load {} never fits remaining capacity",
            skipped.delivery.id,
            skipped.delivery.load
        );
    }

    Sequence { stops, evaluations }
}

/// Tie-break for equidistant candidates: higher priority wins, then the
/// lexicographically lower delivery id.
fn beats_on_ties(challenger: &Candidate<'_>, incumbent: &Candidate<'_>) -> bool {
    match challenger.delivery.priority.cmp(&incumbent.delivery.priority) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => challenger.delivery.id < incumbent.delivery.id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortest_path::dijkstra;
    use optiroute_core::test_support::{delivery, grid_locations};
    use optiroute_core::{Delivery, Priority};
    use rstest::rstest;

    fn fixture_network() -> GridNetwork {
        GridNetwork::new(&grid_locations())
    }

    fn ids<'a>(sequence: &Sequence<'a>) -> Vec<&'a str> {
        sequence
            .stops
            .iter()
            .map(|stop| stop.delivery.id.as_str())
            .collect()
    }

    #[rstest]
    fn unknown_location_is_excluded_not_fatal() {
        let network = fixture_network();
        let deliveries = vec![
            delivery("del-1", "A", "D1", 9, 17, Priority::Normal, 10.0, 10.0),
            delivery("del-2", "B", "ghost", 9, 17, Priority::Normal, 10.0, 10.0),
        ];
        let candidates = resolve_candidates(&network, &deliveries);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates.first().map(|c| c.delivery.id.as_str()), Some("del-1"));
    }

    #[rstest]
    fn canonical_order_puts_priority_before_distance() {
        let network = fixture_network();
        // D3 is far but High priority; D1 is the nearest Normal drop.
        let deliveries = vec![
            delivery("del-1", "A", "D1", 9, 17, Priority::Normal, 10.0, 10.0),
            delivery("del-3", "C", "D3", 9, 17, Priority::High, 10.0, 10.0),
            delivery("del-2", "B", "D2", 9, 17, Priority::Normal, 10.0, 10.0),
        ];
        let candidates = resolve_candidates(&network, &deliveries);
        let source = network.index_of("W1").expect("known id");
        let tree = dijkstra(&network, source);
        let sequence = canonical_order(&candidates, tree.distances(), 100.0);
        assert_eq!(ids(&sequence), vec!["del-3", "del-1", "del-2"]);
    }

    #[rstest]
    fn canonical_order_breaks_distance_ties_by_id() {
        let network = fixture_network();
        // D1 and D2 are both one cell from the warehouse.
        let deliveries = vec![
            delivery("del-2", "B", "D2", 9, 17, Priority::Normal, 10.0, 10.0),
            delivery("del-1", "A", "D1", 9, 17, Priority::Normal, 10.0, 10.0),
        ];
        let candidates = resolve_candidates(&network, &deliveries);
        let source = network.index_of("W1").expect("known id");
        let tree = dijkstra(&network, source);
        let sequence = canonical_order(&candidates, tree.distances(), 100.0);
        assert_eq!(ids(&sequence), vec!["del-1", "del-2"]);
    }

    #[rstest]
    fn canonical_order_skips_over_capacity_but_keeps_later_fits() {
        let network = fixture_network();
        let deliveries = vec![
            delivery("del-1", "A", "D1", 9, 17, Priority::High, 60.0, 10.0),
            delivery("del-2", "B", "D2", 9, 17, Priority::Normal, 60.0, 10.0),
            delivery("del-3", "C", "D3", 9, 17, Priority::Low, 30.0, 10.0),
        ];
        let candidates = resolve_candidates(&network, &deliveries);
        let source = network.index_of("W1").expect("known id");
        let tree = dijkstra(&network, source);
        let sequence = canonical_order(&candidates, tree.distances(), 100.0);
        // del-2 would overflow after del-1; del-3 still fits.
        assert_eq!(ids(&sequence), vec!["del-1", "del-3"]);
    }

    #[rstest]
    fn greedy_tour_visits_nearest_feasible_first() {
        let network = fixture_network();
        let deliveries = vec![
            delivery("del-3", "C", "D3", 9, 17, Priority::Normal, 10.0, 10.0),
            delivery("del-1", "A", "D1", 9, 17, Priority::Normal, 10.0, 10.0),
        ];
        let candidates = resolve_candidates(&network, &deliveries);
        let source = network.index_of("W1").expect("known id");
        let sequence = nearest_feasible_tour(&network, source, &candidates, 100.0);
        assert_eq!(ids(&sequence), vec!["del-1", "del-3"]);
    }

    #[rstest]
    fn greedy_tour_breaks_distance_ties_by_priority() {
        let network = fixture_network();
        // D1 and D2 tie on distance from the warehouse; the High priority
        // drop wins the tie.
        let deliveries = vec![
            delivery("del-1", "A", "D1", 9, 17, Priority::Normal, 40.0, 10.0),
            delivery("del-2", "B", "D2", 9, 17, Priority::High, 40.0, 10.0),
        ];
        let candidates = resolve_candidates(&network, &deliveries);
        let source = network.index_of("W1").expect("known id");
        let sequence = nearest_feasible_tour(&network, source, &candidates, 100.0);
        assert_eq!(ids(&sequence), vec!["del-2", "del-1"]);
    }

    #[rstest]
    fn greedy_tour_skips_deliveries_that_never_fit() {
        let network = fixture_network();
        let deliveries = vec![
            delivery("del-1", "A", "D1", 9, 17, Priority::Normal, 40.0, 10.0),
            delivery("del-2", "B", "D2", 9, 17, Priority::Normal, 40.0, 10.0),
        ];
        let candidates = resolve_candidates(&network, &deliveries);
        let source = network.index_of("W1").expect("known id");
        let sequence = nearest_feasible_tour(&network, source, &candidates, 30.0);
        assert!(sequence.stops.is_empty());
        assert!(sequence.evaluations >= 2);
    }

    #[rstest]
    fn total_admitted_load_never_exceeds_capacity() {
        let network = fixture_network();
        let deliveries: Vec<Delivery> = (0..6)
            .map(|i| {
                let target = ["D1", "D2", "D3"].get(i % 3).copied().unwrap_or("D1");
                delivery(
                    &format!("del-{i}"),
                    "bulk",
                    target,
                    9,
                    17,
                    Priority::Normal,
                    35.0,
                    10.0,
                )
            })
            .collect();
        let candidates = resolve_candidates(&network, &deliveries);
        let source = network.index_of("W1").expect("known id");
        for capacity in [30.0, 70.0, 100.0, 200.0] {
            let sequence = nearest_feasible_tour(&network, source, &candidates, capacity);
            let admitted: f64 = sequence.stops.iter().map(|s| s.delivery.load).sum();
            assert!(admitted <= capacity, "load {admitted} exceeds {capacity}");
        }
    }
}
