//! Depots, delivery points, and hubs on the dispatch grid.

use geo::Coord;

/// The role a location plays in the dispatch network.
///
/// # Examples
/// ```
/// use optiroute_core::LocationKind;
///
/// assert_eq!(LocationKind::Warehouse.as_str(), "warehouse");
/// assert_eq!(LocationKind::Hub.to_string(), "hub");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LocationKind {
    /// A depot where vehicles load up and start their routes.
    Warehouse,
    /// A customer delivery point.
    Delivery,
    /// A transfer hub.
    Hub,
}

impl LocationKind {
    /// Return the kind as its lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warehouse => "warehouse",
            Self::Delivery => "delivery",
            Self::Hub => "hub",
        }
    }
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named point on the dispatch grid.
///
/// Coordinates are discrete grid cells (`x` = column, `y` = row) on a
/// bounded map; the dashboard renders a 6×6 grid, the engine only relies
/// on the coordinates being small non-negative integers. Locations are
/// immutable once created.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use optiroute_core::{Location, LocationKind};
///
/// let depot = Location::new("W1", "Central Warehouse", Coord { x: 0, y: 0 }, LocationKind::Warehouse);
/// assert_eq!(depot.id, "W1");
/// assert_eq!(depot.kind, LocationKind::Warehouse);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Unique identifier, referenced by deliveries and route steps.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Grid position.
    #[cfg_attr(feature = "serde", serde(with = "coordinates"))]
    pub coordinates: Coord<i32>,
    /// Role tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: LocationKind,
}

impl Location {
    /// Construct a location.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use optiroute_core::{Location, LocationKind};
    ///
    /// let hub = Location::new("H1", "North Hub", Coord { x: 3, y: 1 }, LocationKind::Hub);
    /// assert_eq!(hub.coordinates, Coord { x: 3, y: 1 });
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coordinates: Coord<i32>,
        kind: LocationKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates,
            kind,
        }
    }
}

/// Serialize `geo::Coord<i32>` as the dashboard's `{ "x": .., "y": .. }`
/// object rather than geo's tuple form.
#[cfg(feature = "serde")]
mod coordinates {
    use geo::Coord;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Grid {
        x: i32,
        y: i32,
    }

    pub fn serialize<S: Serializer>(coord: &Coord<i32>, serializer: S) -> Result<S::Ok, S::Error> {
        Grid {
            x: coord.x,
            y: coord.y,
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Coord<i32>, D::Error> {
        let grid = Grid::deserialize(deserializer)?;
        Ok(Coord {
            x: grid.x,
            y: grid.y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LocationKind::Warehouse, "warehouse")]
    #[case(LocationKind::Delivery, "delivery")]
    #[case(LocationKind::Hub, "hub")]
    fn kind_wire_names(#[case] kind: LocationKind, #[case] expected: &str) {
        assert_eq!(kind.as_str(), expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn location_serialises_dashboard_shape() {
        let location = Location::new(
            "W1",
            "Central Warehouse",
            Coord { x: 2, y: 4 },
            LocationKind::Warehouse,
        );
        let json = serde_json::to_value(&location).expect("serialise location");
        assert_eq!(
            json,
            serde_json::json!({
                "id": "W1",
                "name": "Central Warehouse",
                "coordinates": { "x": 2, "y": 4 },
                "type": "warehouse",
            })
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn location_round_trips_from_dashboard_json() {
        let json = r#"{"id":"D3","name":"Market Street","coordinates":{"x":5,"y":1},"type":"delivery"}"#;
        let location: Location = serde_json::from_str(json).expect("parse location");
        assert_eq!(location.coordinates, Coord { x: 5, y: 1 });
        assert_eq!(location.kind, LocationKind::Delivery);
    }
}
