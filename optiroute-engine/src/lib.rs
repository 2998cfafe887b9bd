//! Route optimization engine for OptiRoute.
//!
//! This crate provides [`RouteOptimizer`], the default implementation of
//! the [`RoutePlanner`](optiroute_core::RoutePlanner) trait. It resolves a
//! delivery set against the dispatch grid, runs the selected routing
//! algorithm, and assembles a timestamped, capacity-feasible route with
//! aggregate metrics and instrumentation.
//!
//! The engine is a pure, synchronous computation over an immutable
//! snapshot of locations and deliveries: it holds no shared mutable state
//! across invocations, so one instance may serve concurrent requests
//! without locking. Infeasible deliveries are excluded rather than fatal;
//! only invalid configuration fails a request.

#![forbid(unsafe_code)]

mod metrics;
mod optimizer;
mod schedule;
mod sequencer;
pub mod shortest_path;

pub use metrics::REFERENCE_PROFIT_PER_KM;
pub use optimizer::{OptimizerConfig, RouteOptimizer};
pub use schedule::DAY_START_HOUR;
