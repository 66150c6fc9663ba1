//! Great-circle distance and the default distance matrix provider.
//!
//! Straight-line distance over a spherical Earth. Ignores roads, which is
//! acceptable for ordering stops within a technician's service area.

use crate::coordinate::Coordinate;
use crate::traits::DistanceMatrixProvider;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers.
///
/// Symmetric and exactly zero for identical points. The intermediate term is
/// clamped into `[0, 1]` so coincident or antipodal points never hit an
/// `asin` domain error.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).abs().to_radians();
    let delta_lng = (to.longitude - from.longitude).abs().to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Haversine-based distance matrix provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineMatrix;

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[Coordinate]) -> Vec<Vec<f64>> {
        let n = locations.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate().skip(i + 1) {
                let km = haversine_km(*from, *to);
                matrix[i][j] = km;
                matrix[j][i] = km;
            }
        }

        matrix
    }
}
