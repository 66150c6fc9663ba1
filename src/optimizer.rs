//! Route optimization entry points.
//!
//! Validates a request, builds a nearest-neighbor seed order, refines it with
//! 2-opt when there are enough stops, and computes route metrics.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use crate::construct::nearest_neighbor;
use crate::coordinate::{Coordinate, Depots};
use crate::error::{CoordinateSource, OptimizeError};
use crate::haversine::HaversineMatrix;
use crate::matrix::DistanceTable;
use crate::metrics::{compute_metrics, RefinementApplied, RouteMetrics};
use crate::polyline::Polyline;
use crate::refine::{two_opt, RefineOptions};
use crate::sequence::{persist_sequence, PersistenceReport};
use crate::traits::{DistanceMatrixProvider, SequenceStore, Stop};

/// Below this many stops the input order is returned untouched.
const MIN_STOPS_TO_OPTIMIZE: usize = 2;

/// 2-opt only runs for routes longer than this.
const REFINE_ABOVE_STOPS: usize = 3;

/// Objective to minimize. Only distance is supported for now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationType {
    #[default]
    Distance,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeOptions {
    /// Instant preferred times are measured against. Defaults to the wall clock.
    pub reference_time: Option<DateTime<Utc>>,
    /// Reject requests with more stops than this. Unlimited when unset.
    pub max_stops: Option<usize>,
    pub refine: RefineOptions,
}

/// One technician's stops for one day.
#[derive(Debug)]
pub struct RouteRequest<'a, S> {
    pub stops: &'a [S],
    pub depots: Depots,
    pub consider_traffic: bool,
    pub optimization_type: OptimizationType,
}

impl<'a, S> RouteRequest<'a, S> {
    pub fn new(stops: &'a [S]) -> Self {
        Self {
            stops,
            depots: Depots::none(),
            consider_traffic: false,
            optimization_type: OptimizationType::Distance,
        }
    }

    pub fn start_depot(mut self, start: Coordinate) -> Self {
        self.depots.start = Some(start);
        self
    }

    pub fn end_depot(mut self, end: Coordinate) -> Self {
        self.depots.end = Some(end);
        self
    }

    pub fn consider_traffic(mut self, consider_traffic: bool) -> Self {
        self.consider_traffic = consider_traffic;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult<I> {
    /// Stop ids in visiting order; a permutation of the request's ids.
    pub order: Vec<I>,
    pub refinement_applied: RefinementApplied,
    #[serde(flatten)]
    pub metrics: RouteMetrics,
    pub path: Polyline,
}

impl<I> RouteResult<I> {
    pub fn total_distance_km(&self) -> f64 {
        self.metrics.total_distance_km
    }

    pub fn estimated_duration_hours(&self) -> f64 {
        self.metrics.estimated_duration_hours
    }

    pub fn label(&self) -> &'static str {
        self.metrics.label
    }
}

/// Optimize with default options and great-circle distances.
pub fn optimize<S: Stop>(request: &RouteRequest<'_, S>) -> Result<RouteResult<S::Id>, OptimizeError> {
    optimize_with(request, &OptimizeOptions::default(), &HaversineMatrix)
}

pub fn optimize_with<S, M>(
    request: &RouteRequest<'_, S>,
    options: &OptimizeOptions,
    provider: &M,
) -> Result<RouteResult<S::Id>, OptimizeError>
where
    S: Stop,
    M: DistanceMatrixProvider + ?Sized,
{
    let stops = request.stops;
    let span = info_span!("optimize", stops = stops.len(), traffic = request.consider_traffic);
    let _enter = span.enter();

    validate(request, options)?;

    let coordinates: Vec<Coordinate> = stops.iter().map(Stop::coordinate).collect();
    let table = DistanceTable::build(&coordinates, &request.depots, provider)?;

    let (order, refinement) = if stops.len() < MIN_STOPS_TO_OPTIMIZE {
        debug!("nothing to sequence; keeping input order");
        ((0..stops.len()).collect::<Vec<_>>(), RefinementApplied::None)
    } else {
        let now = options.reference_time.unwrap_or_else(Utc::now);
        let seed = nearest_neighbor(stops, &table, now);

        if stops.len() > REFINE_ABOVE_STOPS {
            let refined = two_opt(&table, &seed, &options.refine);
            debug!(
                seed_km = table.path_km(&seed),
                refined_km = table.path_km(&refined),
                "2-opt refinement finished"
            );
            (refined, RefinementApplied::TwoOpt)
        } else {
            (seed, RefinementApplied::NearestNeighborOnly)
        }
    };

    let metrics = compute_metrics(stops, &table, &order, request.consider_traffic, refinement);
    let path = Polyline::for_route(&coordinates, &order, &request.depots);

    debug!(
        distance_km = metrics.total_distance_km,
        duration_hours = metrics.estimated_duration_hours,
        label = metrics.label,
        "route optimized"
    );

    Ok(RouteResult {
        order: order.iter().map(|&index| stops[index].id().clone()).collect(),
        refinement_applied: refinement,
        metrics,
        path,
    })
}

/// Optimize, then write each job's 1-based position to `store`.
///
/// Nothing is written when optimization fails. Write failures do not fail the
/// call; they are listed in the returned report.
pub fn optimize_and_persist<S, M, T>(
    request: &RouteRequest<'_, S>,
    options: &OptimizeOptions,
    provider: &M,
    store: &mut T,
) -> Result<(RouteResult<S::Id>, PersistenceReport<S::Id>), OptimizeError>
where
    S: Stop,
    M: DistanceMatrixProvider + ?Sized,
    T: SequenceStore<Id = S::Id> + ?Sized,
{
    let result = optimize_with(request, options, provider)?;
    let report = persist_sequence(store, &result.order);
    Ok((result, report))
}

/// Optimize independent requests in parallel. Results keep the input order.
pub fn optimize_batch<S, M>(
    requests: &[RouteRequest<'_, S>],
    options: &OptimizeOptions,
    provider: &M,
) -> Vec<Result<RouteResult<S::Id>, OptimizeError>>
where
    S: Stop + Sync,
    S::Id: Send,
    M: DistanceMatrixProvider + Sync + ?Sized,
{
    requests
        .par_iter()
        .map(|request| optimize_with(request, options, provider))
        .collect()
}

fn validate<S: Stop>(request: &RouteRequest<'_, S>, options: &OptimizeOptions) -> Result<(), OptimizeError> {
    let stops = request.stops;

    if let Some(max) = options.max_stops {
        if stops.len() > max {
            return Err(OptimizeError::TooManyStops {
                count: stops.len(),
                max,
            });
        }
    }

    let depots = [
        (CoordinateSource::StartDepot, request.depots.start),
        (CoordinateSource::EndDepot, request.depots.end),
    ];
    let stop_coordinates = stops
        .iter()
        .enumerate()
        .map(|(index, stop)| (CoordinateSource::Stop(index), Some(stop.coordinate())));
    for (source, coordinate) in stop_coordinates.chain(depots) {
        if let Some(coordinate) = coordinate {
            if !coordinate.is_valid() {
                return Err(OptimizeError::InvalidCoordinate { source, coordinate });
            }
        }
    }

    let mut seen = HashSet::with_capacity(stops.len());
    for stop in stops {
        if !seen.insert(stop.id()) {
            return Err(OptimizeError::DuplicateStopId(format!("{:?}", stop.id())));
        }
    }

    for (index, stop) in stops.iter().enumerate() {
        if let Some(minutes) = stop.service_duration_minutes() {
            if !minutes.is_finite() || minutes < 0.0 {
                return Err(OptimizeError::InvalidServiceDuration { index, minutes });
            }
        }
    }

    Ok(())
}
