//! Data access trait for the dispatch state.
//!
//! The `DispatchStore` trait is the engine's read-only view of the
//! surrounding system's persistence: the current location set and
//! delivery set. The engine never writes through it; saving a plan is an
//! external collaborator's job.

use crate::{Delivery, Location};

/// Read-only access to the current locations and deliveries.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use optiroute_core::{Delivery, DispatchStore, Location, LocationKind};
///
/// struct MemoryStore {
///     locations: Vec<Location>,
///     deliveries: Vec<Delivery>,
/// }
///
/// impl DispatchStore for MemoryStore {
///     fn locations(&self) -> Box<dyn Iterator<Item = Location> + Send + '_> {
///         Box::new(self.locations.iter().cloned())
///     }
///
///     fn deliveries(&self) -> Box<dyn Iterator<Item = Delivery> + Send + '_> {
///         Box::new(self.deliveries.iter().cloned())
///     }
/// }
///
/// let store = MemoryStore {
///     locations: vec![Location::new("W1", "Depot", Coord { x: 0, y: 0 }, LocationKind::Warehouse)],
///     deliveries: Vec::new(),
/// };
/// assert_eq!(store.locations().count(), 1);
/// ```
pub trait DispatchStore {
    /// Return the full location set.
    fn locations(&self) -> Box<dyn Iterator<Item = Location> + Send + '_>;

    /// Return the full delivery set.
    fn deliveries(&self) -> Box<dyn Iterator<Item = Delivery> + Send + '_>;
}
