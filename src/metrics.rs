//! Route distance and duration figures.

use serde::{Deserialize, Serialize};

use crate::matrix::DistanceTable;
use crate::traits::Stop;

/// Assumed average driving speed for travel time estimation.
pub const AVERAGE_SPEED_KMH: f64 = 50.0;

/// Applied to the whole route duration when traffic is considered.
pub const TRAFFIC_MULTIPLIER: f64 = 1.2;

/// Which stages produced the final order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefinementApplied {
    /// Fewer than two stops; the input order was returned as is.
    None,
    NearestNeighborOnly,
    TwoOpt,
}

impl RefinementApplied {
    /// Operator-facing label. Downstream consumers match on these exact strings.
    pub fn label(&self) -> &'static str {
        match self {
            RefinementApplied::TwoOpt => "2-opt applied",
            RefinementApplied::None | RefinementApplied::NearestNeighborOnly => "nearest neighbor only",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMetrics {
    pub total_distance_km: f64,
    pub estimated_duration_hours: f64,
    /// Each leg in travel order, depot legs included.
    pub leg_distances_km: Vec<f64>,
    pub stop_count: usize,
    pub label: &'static str,
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute metrics for `order` (positions into `stops`).
///
/// Sums are kept at full precision; rounding happens once on the way out.
pub fn compute_metrics<S: Stop>(
    stops: &[S],
    table: &DistanceTable,
    order: &[usize],
    consider_traffic: bool,
    refinement: RefinementApplied,
) -> RouteMetrics {
    let legs = table.legs_km(order);
    let total_km = table.path_km(order);

    let travel_hours: f64 = legs.iter().map(|km| km / AVERAGE_SPEED_KMH).sum();
    let service_hours: f64 = order
        .iter()
        .filter_map(|&index| stops[index].service_duration_minutes())
        .map(|minutes| minutes / 60.0)
        .sum();

    let mut duration_hours = travel_hours + service_hours;
    if consider_traffic {
        duration_hours *= TRAFFIC_MULTIPLIER;
    }

    RouteMetrics {
        total_distance_km: round2(total_km),
        estimated_duration_hours: round2(duration_hours),
        leg_distances_km: legs.into_iter().map(round2).collect(),
        stop_count: order.len(),
        label: refinement.label(),
    }
}
