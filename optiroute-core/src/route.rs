//! Engine output: ordered route steps and aggregate metrics.

/// Arrival classification for a route step.
///
/// # Examples
/// ```
/// use optiroute_core::StepStatus;
///
/// assert_eq!(StepStatus::OnTime.as_str(), "on_time");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StepStatus {
    /// The vehicle arrives before the service window opens and waits.
    Pending,
    /// The arrival falls inside the service window.
    OnTime,
    /// The arrival falls after the service window closes.
    Delayed,
}

impl StepStatus {
    /// Return the status as its wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::OnTime => "on_time",
            Self::Delayed => "delayed",
        }
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stop in an optimized route.
///
/// Steps are 1-based and bracketed by the source location: the first step
/// is the departure from the source, the last is the return to it. Only
/// intermediate steps carry a delivery reference.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteStep {
    /// 1-based sequence index.
    pub step: usize,
    /// Identifier of the location visited.
    pub location: String,
    /// Delivery served at this stop; absent for the source and return steps.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub delivery_id: Option<String>,
    /// Distance travelled from the previous step, in km.
    pub distance: f64,
    /// Travel time from the previous step, in minutes.
    pub duration: f64,
    /// Estimated arrival, rendered as a wall-clock `"HH:MM"` string.
    pub eta: String,
    /// Load still on the vehicle after completing this stop.
    pub load: f64,
    /// Arrival classification against the delivery's service window.
    pub status: StepStatus,
}

/// Aggregate figures for an optimized route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteMetrics {
    /// Sum of step distances, in km.
    pub total_distance: f64,
    /// Sum of step durations, in minutes.
    pub total_time: f64,
    /// Number of deliveries included in the route.
    pub deliveries: usize,
    /// Sum of the included deliveries' loads.
    pub capacity_used: f64,
    /// `capacity_used / vehicle_capacity` as a percentage, clamped to 0..=100.
    pub capacity_percent: f64,
    /// Profit-per-distance score normalised to 0..=100.
    pub efficiency: f64,
}

/// The result of one optimization request.
///
/// The route starts and ends at the configured source location whenever at
/// least one delivery was included; with no feasible deliveries it degrades
/// to the single trivial source step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteOptimizationResult {
    /// Ordered steps, bracketed by the source location.
    pub optimized_route: Vec<RouteStep>,
    /// Aggregate route figures.
    pub metrics: RouteMetrics,
    /// Wire name of the algorithm that produced the route.
    pub algorithm: String,
    /// Wall-clock duration of the optimization call, in fractional seconds.
    pub execution_time: f64,
    /// Work counter reported by the algorithm that ran.
    pub nodes_explored: u64,
    /// Distance improvement over the naive input-order baseline, in percent.
    pub improvement: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[cfg(feature = "serde")]
    #[rstest]
    fn step_serialises_dashboard_shape() {
        let step = RouteStep {
            step: 2,
            location: "D1".into(),
            delivery_id: Some("del-1".into()),
            distance: 2.8,
            duration: 5.7,
            eta: "08:05".into(),
            load: 60.0,
            status: StepStatus::OnTime,
        };
        let json = serde_json::to_value(&step).expect("serialise step");
        assert_eq!(json.get("deliveryId"), Some(&serde_json::json!("del-1")));
        assert_eq!(json.get("status"), Some(&serde_json::json!("on_time")));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn return_step_omits_delivery_id() {
        let step = RouteStep {
            step: 3,
            location: "W1".into(),
            delivery_id: None,
            distance: 2.0,
            duration: 4.0,
            eta: "08:15".into(),
            load: 0.0,
            status: StepStatus::OnTime,
        };
        let json = serde_json::to_value(&step).expect("serialise step");
        assert!(json.get("deliveryId").is_none());
    }
}
