//! Turns a visiting order into timestamped, status-classified route steps.

use optiroute_core::{GridNetwork, RouteStep, StepStatus};

use crate::sequencer::Candidate;

/// Hour of the simulated day at which the vehicle leaves the depot.
pub const DAY_START_HOUR: u8 = 8;

/// Walk the visiting order and produce the final step list.
///
/// The route is bracketed by the source: step 1 is the departure, the last
/// step the return. The running clock starts at `day_start_hour` and
/// advances by leg duration; a vehicle arriving before a service window
/// opens waits, so the clock moves up to the window start but never beyond
/// it — later stops must not inherit phantom delay. With no stops the
/// route degrades to the single trivial source step.
#[expect(
    clippy::float_arithmetic,
    reason = "clock and load bookkeeping over fractional hours"
)]
pub fn build_steps(
    network: &GridNetwork,
    source_id: &str,
    source_node: usize,
    stops: &[Candidate<'_>],
    day_start_hour: u8,
) -> Vec<RouteStep> {
    let mut steps = Vec::with_capacity(stops.len() + 2);
    let mut clock = f64::from(day_start_hour);
    let mut carried: f64 = stops.iter().map(|stop| stop.delivery.load).sum();

    steps.push(RouteStep {
        step: 1,
        location: source_id.to_owned(),
        delivery_id: None,
        distance: 0.0,
        duration: 0.0,
        eta: format_clock(clock),
        load: carried,
        status: StepStatus::OnTime,
    });

    let mut position = source_node;
    for stop in stops {
        let distance = network.distance(position, stop.node);
        let duration = network.duration(position, stop.node);
        let eta = clock + duration / 60.0;
        let window = stop.delivery.time_window;

        let status = if window.contains(eta) {
            StepStatus::OnTime
        } else if eta > f64::from(window.end) {
            StepStatus::Delayed
        } else {
            StepStatus::Pending
        };

        // Wait out an early arrival before serving the stop: the clock
        // advances to the window start, never beyond it.
        clock = if eta < f64::from(window.start) {
            f64::from(window.start)
        } else {
            eta
        };
        carried -= stop.delivery.load;

        steps.push(RouteStep {
            step: steps.len() + 1,
            location: stop.delivery.location.clone(),
            delivery_id: Some(stop.delivery.id.clone()),
            distance,
            duration,
            eta: format_clock(eta),
            load: carried.max(0.0),
            status,
        });
        position = stop.node;
    }

    if !stops.is_empty() {
        let distance = network.distance(position, source_node);
        let duration = network.duration(position, source_node);
        let eta = clock + duration / 60.0;
        steps.push(RouteStep {
            step: steps.len() + 1,
            location: source_id.to_owned(),
            delivery_id: None,
            distance,
            duration,
            eta: format_clock(eta),
            load: 0.0,
            status: StepStatus::OnTime,
        });
    }

    steps
}

/// Render a fractional-hour instant as a wall-clock `"HH:MM"` string.
///
/// Minutes round to the nearest whole minute; hours wrap at midnight.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "clock rendering quantises fractional hours to whole minutes"
)]
fn format_clock(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let minute = total_minutes.rem_euclid(60);
    let hour = total_minutes.div_euclid(60).rem_euclid(24);
    format!("{hour:02}:{minute:02}")
}
