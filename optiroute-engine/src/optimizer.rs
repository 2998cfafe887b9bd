//! The `RouteOptimizer`: validation, algorithm dispatch, and assembly.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use optiroute_core::{
    Algorithm, Delivery, GridNetwork, Location, OptimizeError, RouteConfig,
    RouteOptimizationResult, RoutePlanner,
};

use crate::metrics::{self, REFERENCE_PROFIT_PER_KM};
use crate::schedule::{self, DAY_START_HOUR};
use crate::sequencer::{self, Candidate, Sequence};
use crate::shortest_path::{astar, bellman_ford, dijkstra};

/// Configuration for [`RouteOptimizer`].
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Hour of the simulated day at which the vehicle departs.
    pub day_start_hour: u8,
    /// Profit-per-kilometre that scores a perfect 100 efficiency.
    pub reference_profit_per_km: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            day_start_hour: DAY_START_HOUR,
            reference_profit_per_km: REFERENCE_PROFIT_PER_KM,
        }
    }
}

/// The default [`RoutePlanner`] implementation.
///
/// Holds only immutable configuration: each call builds its own network
/// snapshot, so one optimizer may serve concurrent requests without
/// locking.
///
/// # Examples
/// ```
/// use optiroute_core::{Algorithm, RouteConfig, RoutePlanner};
/// use optiroute_core::test_support::{grid_deliveries, grid_locations};
/// use optiroute_engine::RouteOptimizer;
///
/// let optimizer = RouteOptimizer::new();
/// let config = RouteConfig {
///     source_location: "W1".into(),
///     vehicle_capacity: 100.0,
///     algorithm: Algorithm::Tsp,
/// };
/// let result = optimizer
///     .optimize(&config, &grid_locations(), &grid_deliveries())
///     .expect("valid request");
/// assert_eq!(result.algorithm, "tsp");
/// assert!(result.metrics.capacity_used <= 100.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
}

impl RouteOptimizer {
    /// Construct an optimizer with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an optimizer with explicit configuration.
    #[must_use]
    pub const fn with_config(config: OptimizerConfig) -> Self {
        Self { config }
    }
}

impl RoutePlanner for RouteOptimizer {
    fn optimize(
        &self,
        config: &RouteConfig,
        locations: &[Location],
        deliveries: &[Delivery],
    ) -> Result<RouteOptimizationResult, OptimizeError> {
        let started_at = Instant::now();
        validate(config, deliveries)?;

        let network = GridNetwork::new(locations);
        let source = network
            .index_of(&config.source_location)
            .map_err(|_| OptimizeError::UnknownSourceLocation {
                id: config.source_location.clone(),
            })?;

        let candidates = sequencer::resolve_candidates(&network, deliveries);
        let (sequence, nodes_explored) = run_algorithm(
            config.algorithm,
            &network,
            source,
            &candidates,
            config.vehicle_capacity,
        );
        log::debug!(
            "{} sequenced {} of {} deliveries, {} work units",
            config.algorithm,
            sequence.stops.len(),
            deliveries.len(),
            nodes_explored
        );

        let steps = schedule::build_steps(
            &network,
            &config.source_location,
            source,
            &sequence.stops,
            self.config.day_start_hour,
        );
        let route_metrics = metrics::aggregate(
            &steps,
            &sequence.stops,
            config.vehicle_capacity,
            self.config.reference_profit_per_km,
        );
        let improvement = baseline_improvement(
            &network,
            source,
            &candidates,
            &sequence.stops,
            route_metrics.total_distance,
        );

        Ok(RouteOptimizationResult {
            optimized_route: steps,
            metrics: route_metrics,
            algorithm: config.algorithm.as_str().to_owned(),
            execution_time: started_at.elapsed().as_secs_f64(),
            nodes_explored,
            improvement,
        })
    }
}

/// Reject invalid configuration before any work happens.
fn validate(config: &RouteConfig, deliveries: &[Delivery]) -> Result<(), OptimizeError> {
    if deliveries.is_empty() {
        return Err(OptimizeError::EmptyDeliverySet);
    }
    if !(config.vehicle_capacity.is_finite() && config.vehicle_capacity > 0.0) {
        return Err(OptimizeError::NonPositiveCapacity {
            capacity: config.vehicle_capacity,
        });
    }
    Ok(())
}

/// Dispatch on the closed algorithm set and return the admitted sequence
/// together with the algorithm's work counter.
fn run_algorithm<'a>(
    algorithm: Algorithm,
    network: &GridNetwork,
    source: usize,
    candidates: &[Candidate<'a>],
    capacity: f64,
) -> (Sequence<'a>, u64) {
    match algorithm {
        Algorithm::Dijkstra => {
            let tree = dijkstra(network, source);
            let sequence = sequencer::canonical_order(candidates, tree.distances(), capacity);
            (sequence, tree.explored())
        }
        Algorithm::BellmanFord => {
            let tree = bellman_ford(network, source);
            let sequence = sequencer::canonical_order(candidates, tree.distances(), capacity);
            (sequence, tree.explored())
        }
        Algorithm::AStar => {
            // One directed search per delivery target; the distance oracle
            // for ordering is the union of the settled targets.
            let mut distances = HashMap::new();
            let mut explored = 0_u64;
            for candidate in candidates {
                let tree = astar(network, source, candidate.node);
                explored += tree.explored();
                if let Some(distance) = tree.distance_to(candidate.node) {
                    distances.insert(candidate.node, distance);
                }
            }
            let sequence = sequencer::canonical_order(candidates, &distances, capacity);
            (sequence, explored)
        }
        Algorithm::Tsp => {
            let sequence = sequencer::nearest_feasible_tour(network, source, candidates, capacity);
            let evaluations = sequence.evaluations;
            (sequence, evaluations)
        }
    }
}

/// Improvement of the optimized tour over the naive baseline: the same
/// included delivery subset visited in input order.
fn baseline_improvement(
    network: &GridNetwork,
    source: usize,
    candidates: &[Candidate<'_>],
    stops: &[Candidate<'_>],
    optimized_distance: f64,
) -> f64 {
    let included: HashSet<&str> = stops
        .iter()
        .map(|stop| stop.delivery.id.as_str())
        .collect();
    let baseline_nodes = candidates
        .iter()
        .filter(|candidate| included.contains(candidate.delivery.id.as_str()))
        .map(|candidate| candidate.node);
    let baseline_distance = metrics::tour_distance(network, source, baseline_nodes);
    metrics::improvement(baseline_distance, optimized_distance)
}
