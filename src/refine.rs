//! 2-opt refinement.
//!
//! # Algorithm
//!
//! Each pass takes the current order as a fixed baseline and, for every pair
//! of positions `(i, j)` with `i + 2 <= j < n`, evaluates the baseline with
//! the segment `[i+1..=j]` reversed. The candidate with the smallest total
//! path distance is adopted if it is strictly shorter than the baseline, and
//! another pass starts. When no candidate improves, the order is a 2-opt
//! local optimum and is returned.
//!
//! Position 0 is never part of a reversed segment, so the first stop of the
//! seed order stays first.
//!
//! # Complexity
//!
//! O(n²) candidates per pass, each evaluated in O(n): O(n³) per pass and
//! O(n⁴) worst case overall. There is no pass limit, since cutting the search
//! short could never make a route longer but would leave crossings in place.
//! Callers that need bounded latency should cap the stop count up front.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::matrix::DistanceTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefineOptions {
    /// Stop count from which candidates of a pass are evaluated on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}

/// Best candidate of a pass: (distance, i, j).
type Candidate = (f64, usize, usize);

/// Improve `order` (positions into the table's stops) with 2-opt.
///
/// The returned order is never longer than the input. Orders with fewer than
/// three stops have no candidates and come back unchanged.
pub fn two_opt(table: &DistanceTable, order: &[usize], options: &RefineOptions) -> Vec<usize> {
    let mut current = order.to_vec();
    let n = current.len();
    if n < 3 {
        return current;
    }

    let parallel = n >= options.parallel_threshold;
    let mut current_km = table.path_km(&current);
    let mut passes = 0usize;

    loop {
        let best = if parallel {
            best_candidate_parallel(table, &current, current_km)
        } else {
            best_candidate(table, &current, current_km)
        };

        let Some((km, i, j)) = best else {
            break;
        };

        current[i + 1..=j].reverse();
        passes += 1;
        trace!(pass = passes, i, j, from_km = current_km, to_km = km, "2-opt move adopted");
        current_km = km;
    }

    trace!(passes, distance_km = current_km, "2-opt converged");
    current
}

fn candidate_km(
    table: &DistanceTable,
    baseline: &[usize],
    scratch: &mut Vec<usize>,
    i: usize,
    j: usize,
) -> f64 {
    scratch.clear();
    scratch.extend_from_slice(baseline);
    scratch[i + 1..=j].reverse();
    table.path_km(scratch)
}

/// Best strictly improving candidate for the pairs `(i, j)` of one row.
fn best_in_row(table: &DistanceTable, baseline: &[usize], baseline_km: f64, i: usize) -> Option<Candidate> {
    let n = baseline.len();
    let mut scratch = Vec::with_capacity(n);
    let mut best = None;
    let mut best_km = baseline_km;

    for j in i + 2..n {
        let km = candidate_km(table, baseline, &mut scratch, i, j);
        if km < best_km {
            best_km = km;
            best = Some((km, i, j));
        }
    }

    best
}

fn best_candidate(table: &DistanceTable, baseline: &[usize], baseline_km: f64) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for i in 0..baseline.len() - 2 {
        let threshold = best.map_or(baseline_km, |(km, _, _)| km);
        if let Some(candidate) = best_in_row(table, baseline, threshold, i) {
            best = Some(candidate);
        }
    }

    best
}

/// Same selection as [`best_candidate`]: the shortest candidate, ties going to
/// the earliest `(i, j)`.
fn best_candidate_parallel(table: &DistanceTable, baseline: &[usize], baseline_km: f64) -> Option<Candidate> {
    (0..baseline.len() - 2)
        .into_par_iter()
        .filter_map(|i| best_in_row(table, baseline, baseline_km, i))
        .reduce_with(|a, b| {
            if b.0 < a.0 || (b.0 == a.0 && (b.1, b.2) < (a.1, a.2)) {
                b
            } else {
                a
            }
        })
}
