//! Service-call locations around Henderson and east Las Vegas.
//!
//! Coordinates are street-level points taken from OpenStreetMap.

use route_optimizer::coordinate::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// Technician yard the day starts and ends at.
pub const YARD: Location = Location::new("Yard", 36.0617, -115.0463);

/// Residential service calls for one technician-day.
pub const CALLS: &[Location] = &[
    Location::new("Green Valley Pkwy", 36.0312, -115.0859),
    Location::new("Sunset Rd", 36.0717, -115.0693),
    Location::new("Horizon Ridge", 36.0055, -115.0524),
    Location::new("Eastern Ave", 36.0436, -115.1170),
    Location::new("Lake Mead Pkwy", 36.0393, -114.9821),
    Location::new("Stephanie St", 36.0580, -115.0478),
    Location::new("Warm Springs Rd", 36.0563, -115.0997),
    Location::new("Anthem Village", 35.9776, -115.0996),
    Location::new("Boulder Hwy", 36.0658, -115.0121),
    Location::new("Wigwam Pkwy", 36.0173, -115.1003),
    Location::new("Pecos Rd", 36.0884, -115.1011),
    Location::new("Racetrack Rd", 36.0412, -115.0055),
];

/// Offsets of (0,0), (0,1), (1,1), (1,0) degrees from the equator origin.
pub const SQUARE: &[Location] = &[
    Location::new("sw", 0.0, 0.0),
    Location::new("ne", 1.0, 1.0),
    Location::new("se", 0.0, 1.0),
    Location::new("nw", 1.0, 0.0),
];
