//! Per-request distance lookup over stops and depots.
//!
//! Locations are laid out as `[stop 0, .., stop n-1, start depot?, end depot?]`.
//! Every stage reads legs from the same table, so construction, refinement
//! and metrics agree exactly on leg lengths.

use crate::coordinate::{Coordinate, Depots};
use crate::error::OptimizeError;
use crate::traits::DistanceMatrixProvider;

#[derive(Debug, Clone)]
pub struct DistanceTable {
    km: Vec<Vec<f64>>,
    stop_count: usize,
    start: Option<usize>,
    end: Option<usize>,
}

impl DistanceTable {
    /// Ask `provider` for a matrix covering the stops and depots, then check its shape.
    pub fn build<M>(stops: &[Coordinate], depots: &Depots, provider: &M) -> Result<Self, OptimizeError>
    where
        M: DistanceMatrixProvider + ?Sized,
    {
        let mut locations = stops.to_vec();
        let start = depots.start.map(|coordinate| {
            locations.push(coordinate);
            locations.len() - 1
        });
        let end = depots.end.map(|coordinate| {
            locations.push(coordinate);
            locations.len() - 1
        });

        let km = provider.matrix_for(&locations);
        Self::from_matrix(km, stops.len(), start, end)
    }

    /// Wrap an existing matrix laid out as described in the module docs.
    pub fn from_matrix(
        km: Vec<Vec<f64>>,
        stop_count: usize,
        start: Option<usize>,
        end: Option<usize>,
    ) -> Result<Self, OptimizeError> {
        let expected = stop_count + start.is_some() as usize + end.is_some() as usize;
        if km.len() != expected {
            return Err(OptimizeError::MatrixShape {
                expected,
                rows: km.len(),
            });
        }

        for (from, row) in km.iter().enumerate() {
            if row.len() != expected {
                return Err(OptimizeError::MatrixShape {
                    expected,
                    rows: km.len(),
                });
            }
            if let Some((to, &value)) = row
                .iter()
                .enumerate()
                .find(|(_, value)| !value.is_finite() || **value < 0.0)
            {
                return Err(OptimizeError::InvalidDistance { from, to, value });
            }
        }

        Ok(Self {
            km,
            stop_count,
            start,
            end,
        })
    }

    pub fn stop_count(&self) -> usize {
        self.stop_count
    }

    /// Location index of the start depot, if one was supplied.
    pub fn start_depot(&self) -> Option<usize> {
        self.start
    }

    /// Location index of the end depot, if one was supplied.
    pub fn end_depot(&self) -> Option<usize> {
        self.end
    }

    /// Distance between two location indices.
    pub fn between(&self, from: usize, to: usize) -> f64 {
        self.km[from][to]
    }

    /// Total path distance: start depot leg, stop-to-stop legs, end depot leg.
    ///
    /// An empty order has no legs, even when both depots are present.
    pub fn path_km(&self, order: &[usize]) -> f64 {
        let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
            return 0.0;
        };

        let mut total = 0.0;
        if let Some(start) = self.start {
            total += self.km[start][first];
        }
        for pair in order.windows(2) {
            total += self.km[pair[0]][pair[1]];
        }
        if let Some(end) = self.end {
            total += self.km[last][end];
        }
        total
    }

    /// Individual leg distances in travel order, depot legs included.
    pub fn legs_km(&self, order: &[usize]) -> Vec<f64> {
        let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
            return Vec::new();
        };

        let mut legs = Vec::with_capacity(order.len() + 1);
        if let Some(start) = self.start {
            legs.push(self.km[start][first]);
        }
        legs.extend(order.windows(2).map(|pair| self.km[pair[0]][pair[1]]));
        if let Some(end) = self.end {
            legs.push(self.km[last][end]);
        }
        legs
    }
}
