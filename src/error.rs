//! Errors surfaced by the optimizer.

use std::fmt;

use crate::coordinate::Coordinate;

/// Where an invalid coordinate was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSource {
    /// Stop at this position in the request.
    Stop(usize),
    StartDepot,
    EndDepot,
}

impl fmt::Display for CoordinateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateSource::Stop(index) => write!(f, "stop #{}", index),
            CoordinateSource::StartDepot => write!(f, "start depot"),
            CoordinateSource::EndDepot => write!(f, "end depot"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptimizeError {
    /// Request exceeds the configured stop cap.
    TooManyStops { count: usize, max: usize },
    InvalidCoordinate {
        source: CoordinateSource,
        coordinate: Coordinate,
    },
    /// The same id appears more than once; carries the debug form of the id.
    DuplicateStopId(String),
    /// Negative or non-finite service duration on the stop at this position.
    InvalidServiceDuration { index: usize, minutes: f64 },
    /// Distance provider returned a matrix of the wrong shape.
    MatrixShape { expected: usize, rows: usize },
    /// Distance provider returned a negative or non-finite entry.
    InvalidDistance { from: usize, to: usize, value: f64 },
}

impl fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimizeError::TooManyStops { count, max } => {
                write!(f, "too many stops: {} exceeds the limit of {}", count, max)
            }
            OptimizeError::InvalidCoordinate { source, coordinate } => write!(
                f,
                "invalid coordinate for {}: ({}, {})",
                source, coordinate.latitude, coordinate.longitude
            ),
            OptimizeError::DuplicateStopId(id) => write!(f, "duplicate stop id {}", id),
            OptimizeError::InvalidServiceDuration { index, minutes } => write!(
                f,
                "invalid service duration for stop #{}: {} minutes",
                index, minutes
            ),
            OptimizeError::MatrixShape { expected, rows } => write!(
                f,
                "distance matrix shape mismatch: expected {0}x{0}, got {1} rows",
                expected, rows
            ),
            OptimizeError::InvalidDistance { from, to, value } => {
                write!(f, "invalid distance {} between locations {} and {}", value, from, to)
            }
        }
    }
}

impl std::error::Error for OptimizeError {}

impl OptimizeError {
    /// Whether the error comes from request validation rather than the distance provider.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            OptimizeError::MatrixShape { .. } | OptimizeError::InvalidDistance { .. }
        )
    }
}
