//! Approximate geohash cell dimensions per precision level.
//!
//! The values are empirical calibration data in meters, measured near the
//! equator. They are used as the grid step of the coverage march and are not
//! recomputed from the geohash bit layout.

use crate::error::{ProximityError, Result};

/// Shortest geohash supported.
pub const MIN_PRECISION: usize = 1;

/// Longest geohash supported.
pub const MAX_PRECISION: usize = 12;

/// Cell width (east-west extent) in meters, indexed by `precision - 1`.
pub const CELL_WIDTHS: [f64; MAX_PRECISION] = [
    5009400.0, 1252300.0, 156500.0, 39100.0, 4900.0, 1200.0, 152.9, 38.2, 4.8, 1.2, 0.149, 0.0370,
];

/// Cell height (north-south extent) in meters, indexed by `precision - 1`.
pub const CELL_HEIGHTS: [f64; MAX_PRECISION] = [
    4992600.0, 624100.0, 156000.0, 19500.0, 4900.0, 609.4, 152.4, 19.0, 4.8, 0.595, 0.149, 0.0199,
];

/// Width and height of a grid cell in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

impl CellSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions halved. The coverage march steps by half cells.
    pub fn half(&self) -> Self {
        Self {
            width: self.width / 2.0,
            height: self.height / 2.0,
        }
    }

    /// The smaller of the two dimensions.
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Length of the cell diagonal in meters.
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }
}

/// Returns `true` if `precision` is a supported geohash length.
#[inline]
pub fn is_valid_precision(precision: usize) -> bool {
    (MIN_PRECISION..=MAX_PRECISION).contains(&precision)
}

/// Look up the calibrated cell size for a geohash precision.
///
/// # Errors
///
/// Returns [`ProximityError::InvalidPrecision`] if `precision` is not in `1..=12`.
///
/// # Examples
///
/// ```
/// use proximityhash::compute::cell_size::cell_size;
///
/// let size = cell_size(7).unwrap();
/// assert_eq!(size.width, 152.9);
/// assert_eq!(size.height, 152.4);
///
/// assert!(cell_size(0).is_err());
/// assert!(cell_size(13).is_err());
/// ```
pub fn cell_size(precision: usize) -> Result<CellSize> {
    if !is_valid_precision(precision) {
        return Err(ProximityError::InvalidPrecision(precision));
    }

    let idx = precision - 1;
    Ok(CellSize::new(CELL_WIDTHS[idx], CELL_HEIGHTS[idx]))
}
