//! route-optimizer
//!
//! Single-technician route sequencing: nearest-neighbor construction,
//! 2-opt refinement and route metrics over great-circle distances.

pub mod construct;
pub mod coordinate;
pub mod error;
pub mod haversine;
pub mod matrix;
pub mod metrics;
pub mod optimizer;
pub mod polyline;
pub mod refine;
pub mod sequence;
pub mod traits;
