//! The request/response boundary between the dashboard and the engine.

use thiserror::Error;

use crate::{Delivery, Location, RouteConfig, RouteOptimizationResult};

/// Request-level failures surfaced to the caller.
///
/// These cover invalid configuration only. Infeasible deliveries —
/// over-capacity loads, unresolvable or unreachable locations — are not
/// errors; the engine excludes them and returns its best feasible route.
/// Every variant names the offending field so the caller can present an
/// actionable message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OptimizeError {
    /// The configured source location is not in the location set.
    #[error("source location `{id}` does not exist")]
    UnknownSourceLocation {
        /// The identifier that failed to resolve.
        id: String,
    },
    /// No deliveries were supplied with the request.
    #[error("at least one delivery is required")]
    EmptyDeliverySet,
    /// The vehicle capacity is zero, negative, or not a number.
    #[error("vehicle capacity must be positive, got {capacity}")]
    NonPositiveCapacity {
        /// The rejected capacity value.
        capacity: f64,
    },
}

/// Compute a delivery route for a request.
///
/// Implementations must be pure with respect to their inputs: no shared
/// mutable state across invocations, so one planner instance may serve
/// concurrent requests. They must be `Send + Sync` to run across threads,
/// and should return [`OptimizeError`] for invalid parameters rather than
/// panicking.
pub trait RoutePlanner: Send + Sync {
    /// Optimize a route over an immutable snapshot of the dispatch state.
    fn optimize(
        &self,
        config: &RouteConfig,
        locations: &[Location],
        deliveries: &[Delivery],
    ) -> Result<RouteOptimizationResult, OptimizeError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Algorithm, RouteMetrics, test_support};
    use rstest::rstest;

    struct TrivialPlanner;

    impl RoutePlanner for TrivialPlanner {
        fn optimize(
            &self,
            config: &RouteConfig,
            locations: &[Location],
            deliveries: &[Delivery],
        ) -> Result<RouteOptimizationResult, OptimizeError> {
            if deliveries.is_empty() {
                return Err(OptimizeError::EmptyDeliverySet);
            }
            if !locations.iter().any(|l| l.id == config.source_location) {
                return Err(OptimizeError::UnknownSourceLocation {
                    id: config.source_location.clone(),
                });
            }
            Ok(RouteOptimizationResult {
                optimized_route: Vec::new(),
                metrics: RouteMetrics {
                    total_distance: 0.0,
                    total_time: 0.0,
                    deliveries: 0,
                    capacity_used: 0.0,
                    capacity_percent: 0.0,
                    efficiency: 0.0,
                },
                algorithm: config.algorithm.as_str().to_owned(),
                execution_time: 0.0,
                nodes_explored: 0,
                improvement: 0.0,
            })
        }
    }

    fn config(source: &str) -> RouteConfig {
        RouteConfig {
            source_location: source.to_owned(),
            vehicle_capacity: 100.0,
            algorithm: Algorithm::Dijkstra,
        }
    }

    #[rstest]
    fn empty_delivery_set_is_rejected() {
        let planner = TrivialPlanner;
        let err = planner
            .optimize(&config("W1"), &test_support::grid_locations(), &[])
            .expect_err("empty delivery set");
        assert_eq!(err, OptimizeError::EmptyDeliverySet);
    }

    #[rstest]
    fn unknown_source_names_the_offender() {
        let planner = TrivialPlanner;
        let deliveries = test_support::grid_deliveries();
        let err = planner
            .optimize(&config("nowhere"), &test_support::grid_locations(), &deliveries)
            .expect_err("unknown source");
        assert_eq!(
            err,
            OptimizeError::UnknownSourceLocation {
                id: "nowhere".to_owned()
            }
        );
    }
}
