//! Delivery orders and their scheduling constraints.

use thiserror::Error;

/// Delivery urgency. Ordered so that `High > Normal > Low`.
///
/// # Examples
/// ```
/// use optiroute_core::Priority;
///
/// assert!(Priority::High > Priority::Normal);
/// assert!(Priority::Normal > Priority::Low);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    /// Can slip without penalty.
    Low,
    /// Default urgency.
    Normal,
    /// Must be served ahead of everything else.
    High,
}

/// An hour-granular service window within the simulated day.
///
/// Hours are in `0..=23` and the window start must precede its end.
///
/// # Examples
/// ```
/// use optiroute_core::TimeWindow;
///
/// # fn main() -> Result<(), optiroute_core::TimeWindowError> {
/// let window = TimeWindow::new(9, 17)?;
/// assert!(window.contains(12.5));
/// assert!(!window.contains(17.25));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeWindow {
    /// First hour at which service may begin.
    pub start: u8,
    /// Last hour at which arrival still counts as on time.
    pub end: u8,
}

/// Errors returned by [`TimeWindow::new`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimeWindowError {
    /// An hour fell outside the day.
    #[error("time window hour {hour} is outside 0..=23")]
    HourOutOfRange {
        /// The offending hour.
        hour: u8,
    },
    /// The window was empty or inverted.
    #[error("time window start {start} must be before end {end}")]
    StartNotBeforeEnd {
        /// Window start hour.
        start: u8,
        /// Window end hour.
        end: u8,
    },
}

impl TimeWindow {
    /// Validate and construct a time window.
    pub fn new(start: u8, end: u8) -> Result<Self, TimeWindowError> {
        let window = Self { start, end };
        window.validate()?;
        Ok(window)
    }

    /// Re-check the invariants, e.g. after deserialization.
    pub fn validate(&self) -> Result<(), TimeWindowError> {
        for hour in [self.start, self.end] {
            if hour > 23 {
                return Err(TimeWindowError::HourOutOfRange { hour });
            }
        }
        if self.start >= self.end {
            return Err(TimeWindowError::StartNotBeforeEnd {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Whether a fractional-hour instant falls inside the window.
    ///
    /// Both bounds are inclusive: arriving exactly at the closing hour is
    /// still on time.
    #[must_use]
    pub fn contains(&self, hour: f64) -> bool {
        hour >= f64::from(self.start) && hour <= f64::from(self.end)
    }
}

/// A delivery order referencing a location by identifier.
///
/// The delivery keeps only the location id, not the location itself; the
/// engine resolves the reference against the current location set and
/// excludes deliveries whose reference cannot be resolved.
///
/// # Examples
/// ```
/// use optiroute_core::{Delivery, Priority, TimeWindow};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let delivery = Delivery::new(
///     "del-1",
///     "Acme Ltd",
///     "D3",
///     TimeWindow::new(9, 17)?,
///     Priority::High,
///     40.0,
///     120.0,
/// )?;
/// assert_eq!(delivery.location, "D3");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Delivery {
    /// Unique identifier.
    pub id: String,
    /// Customer display name.
    pub name: String,
    /// Identifier of the [`Location`](crate::Location) to visit.
    pub location: String,
    /// Service window.
    pub time_window: TimeWindow,
    /// Urgency relative to other deliveries.
    pub priority: Priority,
    /// Weight placed on the vehicle, in capacity units.
    pub load: f64,
    /// Revenue earned by serving the delivery.
    pub profit: f64,
}

/// Errors returned by [`Delivery::new`] and [`Delivery::validate`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeliveryError {
    /// The load must be a positive weight.
    #[error("delivery load must be positive, got {load}")]
    NonPositiveLoad {
        /// The offending load value.
        load: f64,
    },
    /// The profit must be a positive value.
    #[error("delivery profit must be positive, got {profit}")]
    NonPositiveProfit {
        /// The offending profit value.
        profit: f64,
    },
    /// The service window failed validation.
    #[error(transparent)]
    InvalidTimeWindow(#[from] TimeWindowError),
}

impl Delivery {
    /// Validate and construct a delivery.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        time_window: TimeWindow,
        priority: Priority,
        load: f64,
        profit: f64,
    ) -> Result<Self, DeliveryError> {
        let delivery = Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            time_window,
            priority,
            load,
            profit,
        };
        delivery.validate()?;
        Ok(delivery)
    }

    /// Re-check the invariants, e.g. after deserialization.
    pub fn validate(&self) -> Result<(), DeliveryError> {
        if !(self.load.is_finite() && self.load > 0.0) {
            return Err(DeliveryError::NonPositiveLoad { load: self.load });
        }
        if !(self.profit.is_finite() && self.profit > 0.0) {
            return Err(DeliveryError::NonPositiveProfit {
                profit: self.profit,
            });
        }
        self.time_window.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample(load: f64, profit: f64) -> Result<Delivery, DeliveryError> {
        Delivery::new(
            "del-1",
            "Acme Ltd",
            "D1",
            TimeWindow { start: 9, end: 17 },
            Priority::Normal,
            load,
            profit,
        )
    }

    #[rstest]
    #[case(24, 25)]
    #[case(0, 24)]
    fn window_rejects_out_of_day_hours(#[case] start: u8, #[case] end: u8) {
        assert!(matches!(
            TimeWindow::new(start, end),
            Err(TimeWindowError::HourOutOfRange { .. })
        ));
    }

    #[rstest]
    #[case(9, 9)]
    #[case(17, 9)]
    fn window_rejects_inverted_bounds(#[case] start: u8, #[case] end: u8) {
        assert_eq!(
            TimeWindow::new(start, end),
            Err(TimeWindowError::StartNotBeforeEnd { start, end })
        );
    }

    #[rstest]
    #[case(9.0, true)] // opening hour is inclusive
    #[case(17.0, true)] // closing hour is inclusive
    #[case(8.99, false)]
    #[case(17.01, false)]
    fn window_bounds_are_inclusive(#[case] hour: f64, #[case] inside: bool) {
        let window = TimeWindow::new(9, 17).expect("valid window");
        assert_eq!(window.contains(hour), inside);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-4.0)]
    #[case(f64::NAN)]
    fn delivery_rejects_non_positive_load(#[case] load: f64) {
        assert!(matches!(
            sample(load, 10.0),
            Err(DeliveryError::NonPositiveLoad { .. })
        ));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    fn delivery_rejects_non_positive_profit(#[case] profit: f64) {
        assert!(matches!(
            sample(40.0, profit),
            Err(DeliveryError::NonPositiveProfit { .. })
        ));
    }

    #[rstest]
    fn priority_orders_high_first() {
        let mut priorities = vec![Priority::Normal, Priority::High, Priority::Low];
        priorities.sort();
        assert_eq!(
            priorities,
            vec![Priority::Low, Priority::Normal, Priority::High]
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn delivery_parses_dashboard_json() {
        let json = r#"{
            "id": "del-7",
            "name": "Bakery",
            "location": "D2",
            "timeWindow": { "start": 9, "end": 17 },
            "priority": "High",
            "load": 35.5,
            "profit": 80.0
        }"#;
        let delivery: Delivery = serde_json::from_str(json).expect("parse delivery");
        assert_eq!(delivery.priority, Priority::High);
        assert_eq!(delivery.time_window, TimeWindow { start: 9, end: 17 });
        delivery.validate().expect("valid delivery");
    }
}
