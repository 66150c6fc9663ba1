//! Nearest-neighbor route construction.
//!
//! Greedy seed order: from the current location, always go to the unvisited
//! stop with the lowest score, where score is leg distance plus a soft
//! penalty for stops whose preferred time is far from "now".
//!
//! Without a start depot the search is anchored at the first stop in input
//! order. That stop has a zero-length leg and is normally picked first.

use chrono::{DateTime, Utc};

use crate::matrix::DistanceTable;
use crate::traits::Stop;

/// Score added per hour between a stop's preferred time and the reference time.
pub const TIME_PENALTY_PER_HOUR: f64 = 0.1;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Soft time-window penalty for a stop. Zero when no preference is set.
pub fn time_penalty(preferred: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    preferred.map_or(0.0, |preferred| {
        let hours = (preferred - now).num_milliseconds() as f64 / MILLIS_PER_HOUR;
        hours.abs() * TIME_PENALTY_PER_HOUR
    })
}

/// Build a visiting order as positions into `stops`.
///
/// Exact score ties go to the stop that comes first in input order, so the
/// result is deterministic for a stable input sequence.
pub fn nearest_neighbor<S: Stop>(stops: &[S], table: &DistanceTable, now: DateTime<Utc>) -> Vec<usize> {
    debug_assert_eq!(stops.len(), table.stop_count());
    if stops.is_empty() {
        return Vec::new();
    }

    let penalties: Vec<f64> = stops
        .iter()
        .map(|stop| time_penalty(stop.preferred_time(), now))
        .collect();

    let mut unvisited: Vec<usize> = (0..stops.len()).collect();
    let mut order = Vec::with_capacity(stops.len());
    let mut current = table.start_depot().unwrap_or(0);

    while !unvisited.is_empty() {
        let mut best_slot = 0;
        let mut best_score = f64::INFINITY;

        for (slot, &stop) in unvisited.iter().enumerate() {
            let score = table.between(current, stop) + penalties[stop];
            if score < best_score {
                best_score = score;
                best_slot = slot;
            }
        }

        let next = unvisited.remove(best_slot);
        order.push(next);
        current = next;
    }

    order
}
