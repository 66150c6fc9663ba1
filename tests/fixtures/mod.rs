//! Test fixtures for route-optimizer.
//!
//! Provides:
//! - A technician's service area with real street-level coordinates
//! - A builder-style job type implementing `Stop`
//! - An in-memory sequence store with injectable failures

#![allow(dead_code)]

pub mod service_area;

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use route_optimizer::coordinate::Coordinate;
use route_optimizer::traits::{SequenceStore, Stop};

pub use service_area::*;

#[derive(Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct JobId(pub String);

impl JobId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Builder for test jobs with sensible defaults.
#[derive(Clone, Debug)]
pub struct TestJob {
    pub id: JobId,
    pub coordinate: Coordinate,
    pub preferred_time: Option<DateTime<Utc>>,
    pub service_minutes: Option<f64>,
}

impl TestJob {
    pub fn new(id: &str) -> Self {
        Self {
            id: JobId::new(id),
            coordinate: Coordinate::new(0.0, 0.0),
            preferred_time: None,
            service_minutes: None,
        }
    }

    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.coordinate = Coordinate::new(lat, lng);
        self
    }

    pub fn located(mut self, location: &Location) -> Self {
        self.coordinate = location.coordinate();
        self
    }

    pub fn preferred(mut self, time: DateTime<Utc>) -> Self {
        self.preferred_time = Some(time);
        self
    }

    pub fn service(mut self, minutes: f64) -> Self {
        self.service_minutes = Some(minutes);
        self
    }
}

impl Stop for TestJob {
    type Id = JobId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    fn preferred_time(&self) -> Option<DateTime<Utc>> {
        self.preferred_time
    }

    fn service_duration_minutes(&self) -> Option<f64> {
        self.service_minutes
    }
}

/// Jobs for each location, ids taken from the location names.
pub fn jobs_at(locations: &[Location]) -> Vec<TestJob> {
    locations
        .iter()
        .map(|location| TestJob::new(location.name).located(location))
        .collect()
}

/// In-memory job store accepting sequence positions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub positions: HashMap<JobId, usize>,
    pub writes: usize,
    /// Every write after this many attempts fails.
    pub fail_after: Option<usize>,
}

impl MemoryStore {
    pub fn failing_after(writes: usize) -> Self {
        Self {
            fail_after: Some(writes),
            ..Default::default()
        }
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(&JobId::new(id)).copied()
    }
}

impl SequenceStore for MemoryStore {
    type Id = JobId;
    type Error = String;

    fn set_sequence_position(&mut self, id: &Self::Id, position: usize) -> Result<(), Self::Error> {
        self.writes += 1;
        if self.fail_after.is_some_and(|limit| self.writes > limit) {
            return Err(format!("store unavailable while writing {}", id.0));
        }
        self.positions.insert(id.clone(), position);
        Ok(())
    }
}

/// Ids of a result as plain strings.
pub fn ids(order: &[JobId]) -> Vec<&str> {
    order.iter().map(|id| id.0.as_str()).collect()
}
