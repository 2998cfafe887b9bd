//! Optimization request parameters.

use thiserror::Error;

/// The routing algorithm a request selects.
///
/// A closed set rather than a free-form string, so dispatch is a `match`
/// and unknown names are rejected at the boundary.
///
/// # Examples
/// ```
/// use optiroute_core::Algorithm;
///
/// let algorithm: Algorithm = "astar".parse()?;
/// assert_eq!(algorithm, Algorithm::AStar);
/// assert_eq!(Algorithm::BellmanFord.as_str(), "bellman");
/// # Ok::<(), optiroute_core::AlgorithmParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Priority-queue shortest paths from the source.
    Dijkstra,
    /// Dijkstra with a straight-line heuristic towards each target.
    #[cfg_attr(feature = "serde", serde(rename = "astar"))]
    AStar,
    /// Greedy capacitated multi-stop sequencing.
    Tsp,
    /// Iterative edge relaxation, tolerant of negative weights.
    #[cfg_attr(feature = "serde", serde(rename = "bellman"))]
    BellmanFord,
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown algorithm `{name}` (expected dijkstra, astar, tsp, or bellman)")]
pub struct AlgorithmParseError {
    /// The unrecognised name.
    pub name: String,
}

impl Algorithm {
    /// Every selectable algorithm, in dashboard menu order.
    pub const ALL: [Self; 4] = [Self::Dijkstra, Self::AStar, Self::Tsp, Self::BellmanFord];

    /// Return the algorithm's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
            Self::Tsp => "tsp",
            Self::BellmanFord => "bellman",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = AlgorithmParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == name)
            .ok_or_else(|| AlgorithmParseError {
                name: name.to_owned(),
            })
    }
}

/// Parameters for a single optimization request.
///
/// Transient: one config per request, no state retained between calls.
///
/// # Examples
/// ```
/// use optiroute_core::{Algorithm, RouteConfig};
///
/// let config = RouteConfig {
///     source_location: "W1".into(),
///     vehicle_capacity: 100.0,
///     algorithm: Algorithm::Tsp,
/// };
/// assert_eq!(config.algorithm.as_str(), "tsp");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteConfig {
    /// Identifier of the location the vehicle departs from and returns to.
    pub source_location: String,
    /// Vehicle capacity in load units. Must be positive.
    pub vehicle_capacity: f64,
    /// Selected routing algorithm.
    pub algorithm: Algorithm,
}
