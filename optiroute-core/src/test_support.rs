//! Test-only fixtures: an in-memory `DispatchStore` and a small grid
//! scenario shared by unit, integration, and property tests.

use geo::Coord;

use crate::{Delivery, DispatchStore, Location, LocationKind, Priority, TimeWindow};

/// In-memory `DispatchStore` backed by plain vectors.
///
/// Performs linear scans and is intended only for small datasets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    locations: Vec<Location>,
    deliveries: Vec<Delivery>,
}

impl MemoryStore {
    /// Create a store holding the given locations and no deliveries.
    pub fn with_locations<I>(locations: I) -> Self
    where
        I: IntoIterator<Item = Location>,
    {
        Self {
            locations: locations.into_iter().collect(),
            deliveries: Vec::new(),
        }
    }

    /// Create a store holding the given locations and deliveries.
    pub fn new<L, D>(locations: L, deliveries: D) -> Self
    where
        L: IntoIterator<Item = Location>,
        D: IntoIterator<Item = Delivery>,
    {
        Self {
            locations: locations.into_iter().collect(),
            deliveries: deliveries.into_iter().collect(),
        }
    }
}

impl DispatchStore for MemoryStore {
    fn locations(&self) -> Box<dyn Iterator<Item = Location> + Send + '_> {
        Box::new(self.locations.iter().cloned())
    }

    fn deliveries(&self) -> Box<dyn Iterator<Item = Delivery> + Send + '_> {
        Box::new(self.deliveries.iter().cloned())
    }
}

/// A small dispatch grid: one warehouse at the origin, three delivery
/// points, and a hub.
pub fn grid_locations() -> Vec<Location> {
    vec![
        Location::new("W1", "Central Warehouse", Coord { x: 0, y: 0 }, LocationKind::Warehouse),
        Location::new("D1", "Market Street", Coord { x: 1, y: 0 }, LocationKind::Delivery),
        Location::new("D2", "Harbour View", Coord { x: 0, y: 1 }, LocationKind::Delivery),
        Location::new("D3", "Old Town", Coord { x: 3, y: 4 }, LocationKind::Delivery),
        Location::new("H1", "North Hub", Coord { x: 5, y: 5 }, LocationKind::Hub),
    ]
}

/// Deliveries matching [`grid_locations`]: two nearby drops of equal load
/// and one distant heavy drop.
pub fn grid_deliveries() -> Vec<Delivery> {
    vec![
        delivery("del-1", "Market Grocer", "D1", 9, 17, Priority::Normal, 40.0, 90.0),
        delivery("del-2", "Harbour Cafe", "D2", 9, 17, Priority::High, 40.0, 110.0),
        delivery("del-3", "Old Town Books", "D3", 10, 18, Priority::Low, 55.0, 60.0),
    ]
}

/// Shorthand constructor for a valid delivery fixture.
///
/// # Panics
///
/// Panics when the fixture parameters violate delivery invariants; test
/// fixtures are expected to be valid by construction.
pub fn delivery(
    id: &str,
    customer: &str,
    location: &str,
    start: u8,
    end: u8,
    priority: Priority,
    load: f64,
    profit: f64,
) -> Delivery {
    #[expect(clippy::expect_used, reason = "fixture inputs are valid by construction")]
    let window = TimeWindow::new(start, end).expect("valid fixture window");
    #[expect(clippy::expect_used, reason = "fixture inputs are valid by construction")]
    let delivery = Delivery::new(id, customer, location, window, priority, load, profit)
        .expect("valid fixture delivery");
    delivery
}
