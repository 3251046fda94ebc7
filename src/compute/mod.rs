//! Compute layer for coverage generation.
//!
//! Calibration data, request validation, and the planar geometry the
//! coverage march is built from. Nothing here touches the geohash codec.

pub mod cell_size;
pub mod geometry;
pub mod validation;

pub use cell_size::{CellSize, MAX_PRECISION, MIN_PRECISION, cell_size};
pub use geometry::{PlanarProjection, Quadrant, centroid, in_circle, planar_to_geographic};
