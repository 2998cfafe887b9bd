//! Facade crate for the OptiRoute dispatch engine.
//!
//! This crate re-exports the core domain types and exposes the route
//! optimizer behind a feature flag.

#![forbid(unsafe_code)]

pub use optiroute_core::{
    Algorithm, Delivery, DeliveryError, DispatchStore, GridNetwork, Location, LocationKind,
    LookupError, OptimizeError, Priority, RouteConfig, RouteMetrics, RouteOptimizationResult,
    RoutePlanner, RouteStep, StepStatus, TimeWindow, TimeWindowError,
};

#[cfg(feature = "engine")]
pub use optiroute_engine::{OptimizerConfig, RouteOptimizer};
