//! The implicit complete graph over dispatch locations.
//!
//! The network stores an index-addressed coordinate table and computes
//! pairwise weights on demand, so memory stays linear in the location
//! count regardless of edge count. Edge weight is the Euclidean distance
//! between grid cells scaled to kilometres; duration derives from a fixed
//! average vehicle speed.

use std::collections::HashMap;

use geo::Coord;
use thiserror::Error;

use crate::Location;

/// Kilometres represented by one grid cell.
pub const KM_PER_CELL: f64 = 2.0;

/// Average vehicle speed used to derive travel durations, in km/h.
pub const AVERAGE_SPEED_KMH: f64 = 30.0;

/// Error returned when a location identifier is not part of the network.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown location `{id}`")]
pub struct LookupError {
    /// The identifier that failed to resolve.
    pub id: String,
}

/// The implicit complete graph over a location set.
///
/// Every pair of locations is connected; the edge metric is symmetric,
/// non-negative, zero on the diagonal, and satisfies the triangle
/// inequality by construction from Euclidean coordinates.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use optiroute_core::{GridNetwork, Location, LocationKind};
///
/// let locations = vec![
///     Location::new("W1", "Depot", Coord { x: 0, y: 0 }, LocationKind::Warehouse),
///     Location::new("D1", "Shop", Coord { x: 3, y: 4 }, LocationKind::Delivery),
/// ];
/// let network = GridNetwork::new(&locations);
///
/// let depot = network.index_of("W1")?;
/// let shop = network.index_of("D1")?;
/// // A 3-4-5 triangle: 5 cells at 2 km per cell.
/// assert_eq!(network.distance(depot, shop), 10.0);
/// assert_eq!(network.distance(depot, shop), network.distance(shop, depot));
/// # Ok::<(), optiroute_core::LookupError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridNetwork {
    coordinates: Vec<Coord<i32>>,
    indices: HashMap<String, usize>,
}

impl GridNetwork {
    /// Build a network from the full location set.
    ///
    /// When two locations share an identifier the first occurrence wins;
    /// duplicates are logged and ignored.
    pub fn new(locations: &[Location]) -> Self {
        let mut coordinates = Vec::with_capacity(locations.len());
        let mut indices = HashMap::with_capacity(locations.len());
        for location in locations {
            if indices.contains_key(&location.id) {
                log::warn!("duplicate location id `{}` ignored", location.id);
                continue;
            }
            indices.insert(location.id.clone(), coordinates.len());
            coordinates.push(location.coordinates);
        }
        Self {
            coordinates,
            indices,
        }
    }

    /// Number of nodes in the network.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether the network has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Resolve a location identifier to its node index.
    pub fn index_of(&self, id: &str) -> Result<usize, LookupError> {
        self.indices
            .get(id)
            .copied()
            .ok_or_else(|| LookupError { id: id.to_owned() })
    }

    /// Iterate over all node indices.
    pub fn nodes(&self) -> impl Iterator<Item = usize> + use<> {
        0..self.coordinates.len()
    }

    /// Distance between two nodes in km.
    ///
    /// An out-of-range index indicates a caller bug; it is logged and
    /// reported as zero distance rather than panicking.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "Euclidean edge metric over grid coordinates"
    )]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        let (Some(a), Some(b)) = (self.coordinates.get(from), self.coordinates.get(to)) else {
            log::warn!("distance query for out-of-range node pair ({from}, {to})");
            debug_assert!(false, "node index out of range: ({from}, {to})");
            return 0.0;
        };
        let dx = f64::from(a.x - b.x);
        let dy = f64::from(a.y - b.y);
        dx.hypot(dy) * KM_PER_CELL
    }

    /// Travel time between two nodes in minutes.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "duration derives from distance at a fixed average speed"
    )]
    pub fn duration(&self, from: usize, to: usize) -> f64 {
        self.distance(from, to) / AVERAGE_SPEED_KMH * 60.0
    }

    /// Distance between two locations by identifier, in km.
    ///
    /// Fails with [`LookupError`] when either identifier is unknown.
    pub fn distance_between(&self, from: &str, to: &str) -> Result<f64, LookupError> {
        Ok(self.distance(self.index_of(from)?, self.index_of(to)?))
    }

    /// Travel time between two locations by identifier, in minutes.
    ///
    /// Fails with [`LookupError`] when either identifier is unknown.
    pub fn duration_between(&self, from: &str, to: &str) -> Result<f64, LookupError> {
        Ok(self.duration(self.index_of(from)?, self.index_of(to)?))
    }
}
