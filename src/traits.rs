//! Core domain traits for the route optimizer.
//!
//! These are intentionally minimal. Concrete apps should implement them for
//! their own job and storage models.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use chrono::{DateTime, Utc};

use crate::coordinate::Coordinate;

/// Unique identifier for a stop within one request.
pub trait Id: Clone + Eq + Hash + Debug {}

impl<T> Id for T where T: Clone + Eq + Hash + Debug {}

/// A job to be visited, already geocoded.
///
/// Jobs without a coordinate must be filtered out by the caller.
pub trait Stop {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Resolved location of the job.
    fn coordinate(&self) -> Coordinate;

    /// Customer's preferred visit time, if any.
    fn preferred_time(&self) -> Option<DateTime<Utc>>;

    /// Expected time on site in minutes.
    fn service_duration_minutes(&self) -> Option<f64>;
}

/// Provides a distance matrix in kilometers for a set of locations.
///
/// The matrix is indexed by the provided location order and must be square
/// with one row per location.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[Coordinate]) -> Vec<Vec<f64>>;
}

/// Accepts the per-job sequence position produced by an optimization.
pub trait SequenceStore {
    type Id: Id;
    type Error: Display;

    /// Record `position` (1-based) for the job identified by `id`.
    fn set_sequence_position(&mut self, id: &Self::Id, position: usize) -> Result<(), Self::Error>;
}
