//! Geographic coordinates and depot anchors.

use serde::{Deserialize, Serialize};

/// A WGS84 point in decimal degrees.
///
/// Equality is exact on both components; no tolerance is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite and inside their valid ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Optional fixed start and end points that are not stops themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Depots {
    pub start: Option<Coordinate>,
    pub end: Option<Coordinate>,
}

impl Depots {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn start(start: Coordinate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub fn round_trip(depot: Coordinate) -> Self {
        Self {
            start: Some(depot),
            end: Some(depot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ranges() {
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.1).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_from_tuple() {
        let c: Coordinate = (36.1, -115.1).into();
        assert_eq!(c, Coordinate::new(36.1, -115.1));
    }

    #[test]
    fn test_round_trip_depots() {
        let home = Coordinate::new(1.0, 2.0);
        let depots = Depots::round_trip(home);
        assert_eq!(depots.start, Some(home));
        assert_eq!(depots.end, Some(home));
        assert_eq!(Depots::none(), Depots::default());
    }
}
