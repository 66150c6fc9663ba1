//! Route geometry as a coordinate sequence.
//!
//! Straight-line segments between consecutive points, in travel order.
//! Encoding to a compact wire format is left to whoever renders the route.

use serde::{Deserialize, Serialize};

use crate::coordinate::{Coordinate, Depots};

/// Points visited by a route, depots included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Trace a route: start depot, stops in `order`, end depot.
    ///
    /// An empty order yields an empty polyline even when depots are set,
    /// matching how route distance treats it.
    pub fn for_route(coordinates: &[Coordinate], order: &[usize], depots: &Depots) -> Self {
        if order.is_empty() {
            return Self::default();
        }

        let mut points = Vec::with_capacity(order.len() + 2);
        points.extend(depots.start);
        points.extend(order.iter().map(|&index| coordinates[index]));
        points.extend(depots.end);
        Self { points }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
