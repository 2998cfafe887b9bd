//! Aggregate route figures and comparative instrumentation.

use optiroute_core::{GridNetwork, RouteMetrics, RouteStep};

use crate::sequencer::Candidate;

/// Profit-per-kilometre that scores a perfect 100 efficiency.
pub const REFERENCE_PROFIT_PER_KM: f64 = 25.0;

/// Aggregate the final step sequence into route metrics.
///
/// `capacity_percent` is clamped to 0..=100 at reporting time; the
/// feasibility check itself happens earlier, in the sequencer.
#[expect(clippy::float_arithmetic, reason = "metric aggregation over step figures")]
pub fn aggregate(
    steps: &[RouteStep],
    stops: &[Candidate<'_>],
    vehicle_capacity: f64,
    reference_profit_per_km: f64,
) -> RouteMetrics {
    let total_distance: f64 = steps.iter().map(|step| step.distance).sum();
    let total_time: f64 = steps.iter().map(|step| step.duration).sum();
    let deliveries = steps.iter().filter(|step| step.delivery_id.is_some()).count();
    let capacity_used: f64 = stops.iter().map(|stop| stop.delivery.load).sum();
    let total_profit: f64 = stops.iter().map(|stop| stop.delivery.profit).sum();

    let capacity_percent = if vehicle_capacity > 0.0 {
        (capacity_used / vehicle_capacity * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    RouteMetrics {
        total_distance,
        total_time,
        deliveries,
        capacity_used,
        capacity_percent,
        efficiency: efficiency(total_profit, total_distance, reference_profit_per_km),
    }
}

/// Profit-per-distance score on a 0..=100 scale.
///
/// Monotonically increasing in profit and decreasing in distance. A
/// zero-distance route that still earns profit scores a full 100; no
/// profit scores zero.
#[expect(clippy::float_arithmetic, reason = "score normalisation")]
pub fn efficiency(total_profit: f64, total_distance: f64, reference_profit_per_km: f64) -> f64 {
    if total_profit <= 0.0 {
        return 0.0;
    }
    if total_distance <= 0.0 {
        return 100.0;
    }
    (total_profit / total_distance / reference_profit_per_km * 100.0).clamp(0.0, 100.0)
}

/// Distance improvement of the optimized route over the baseline, in
/// percent, clamped to zero when the optimized route is not shorter.
#[expect(clippy::float_arithmetic, reason = "relative distance comparison")]
pub fn improvement(baseline_distance: f64, optimized_distance: f64) -> f64 {
    if baseline_distance <= 0.0 {
        return 0.0;
    }
    ((baseline_distance - optimized_distance) / baseline_distance * 100.0).max(0.0)
}

/// Round-trip distance of visiting `stops` in order from the source.
///
/// Used to evaluate the naive input-order baseline on the same included
/// delivery subset as the optimized route.
#[expect(clippy::float_arithmetic, reason = "tour length accumulates edge weights")]
pub fn tour_distance(
    network: &GridNetwork,
    source: usize,
    stops: impl IntoIterator<Item = usize>,
) -> f64 {
    let mut total = 0.0;
    let mut position = source;
    let mut moved = false;
    for node in stops {
        total += network.distance(position, node);
        position = node;
        moved = true;
    }
    if moved {
        total += network.distance(position, source);
    }
    total
}
