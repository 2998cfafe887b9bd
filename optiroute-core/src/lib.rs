//! Core domain types for the OptiRoute dispatch engine.
//!
//! These models carry basic validation to keep downstream components
//! honest. Constructors return `Result` to surface invalid input early;
//! the planner trait defines the single request/response boundary the
//! surrounding dashboard calls through.

#![forbid(unsafe_code)]

mod delivery;
mod location;
mod network;
mod planner;
mod request;
mod route;
mod store;

pub use delivery::{Delivery, DeliveryError, Priority, TimeWindow, TimeWindowError};
pub use location::{Location, LocationKind};
pub use network::{AVERAGE_SPEED_KMH, GridNetwork, KM_PER_CELL, LookupError};
pub use planner::{OptimizeError, RoutePlanner};
pub use request::{Algorithm, AlgorithmParseError, RouteConfig};
pub use route::{RouteMetrics, RouteOptimizationResult, RouteStep, StepStatus};
pub use store::DispatchStore;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
