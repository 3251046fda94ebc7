//! Validation for coverage requests.

use crate::compute::cell_size::is_valid_precision;
use crate::error::{ProximityError, Result};
use geo::Point;

/// Validates a center point has valid longitude and latitude.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0]
///
/// # Examples
///
/// ```
/// use proximityhash::compute::validation::validate_center;
/// use geo::Point;
///
/// // Valid point
/// let london = Point::new(-0.1278, 51.5074);
/// assert!(validate_center(&london).is_ok());
///
/// // Invalid longitude
/// let invalid = Point::new(200.0, 40.0);
/// assert!(validate_center(&invalid).is_err());
///
/// // Invalid latitude
/// let invalid = Point::new(-74.0, 95.0);
/// assert!(validate_center(&invalid).is_err());
/// ```
pub fn validate_center(point: &Point) -> Result<()> {
    let (x, y) = (point.x(), point.y());

    if !x.is_finite() {
        return Err(ProximityError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            x
        )));
    }

    if !y.is_finite() {
        return Err(ProximityError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            y
        )));
    }

    if !(-180.0..=180.0).contains(&x) {
        return Err(ProximityError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            x
        )));
    }

    if !(-90.0..=90.0).contains(&y) {
        return Err(ProximityError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            y
        )));
    }

    Ok(())
}

/// Validates a search radius in meters. Zero is allowed.
pub fn validate_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() {
        return Err(ProximityError::InvalidInput(format!(
            "Radius must be finite, got: {}",
            radius
        )));
    }

    if radius < 0.0 {
        return Err(ProximityError::InvalidInput(format!(
            "Radius must be non-negative, got: {}",
            radius
        )));
    }

    Ok(())
}

/// Validates a geohash precision is within `1..=12`.
pub fn validate_precision(precision: usize) -> Result<()> {
    if !is_valid_precision(precision) {
        return Err(ProximityError::InvalidPrecision(precision));
    }
    Ok(())
}
