//! Planar geometry used by the coverage march.
//!
//! Offsets are `geo::Coord` values in meters relative to the query center,
//! with `x` pointing east and `y` pointing north.

use crate::config::{EARTH_RADIUS_METERS, LongitudeWrap};
use geo::{Coord, Point, coord};

/// Returns `true` if `point` lies within `radius` of `center` (boundary included).
///
/// # Examples
///
/// ```
/// use proximityhash::compute::geometry::in_circle;
/// use geo::coord;
///
/// let origin = coord! { x: 0.0, y: 0.0 };
/// assert!(in_circle(coord! { x: 3.0, y: 4.0 }, origin, 5.0));
/// assert!(!in_circle(coord! { x: 3.0, y: 4.1 }, origin, 5.0));
/// ```
#[inline]
pub fn in_circle(point: Coord, center: Coord, radius: f64) -> bool {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    dx * dx + dy * dy <= radius * radius
}

/// Center of a cell whose corner is at `corner`.
#[inline]
pub fn centroid(corner: Coord, height: f64, width: f64) -> Coord {
    coord! {
        x: corner.x + width / 2.0,
        y: corner.y + height / 2.0,
    }
}

/// One of the four sign combinations applied to a first-quadrant offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// (+x, +y)
    NorthEast,
    /// (+x, -y)
    SouthEast,
    /// (-x, +y)
    NorthWest,
    /// (-x, -y)
    SouthWest,
}

impl Quadrant {
    /// All quadrants, in emission order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::SouthEast,
        Quadrant::NorthWest,
        Quadrant::SouthWest,
    ];

    /// Sign multipliers `(x, y)` for this quadrant.
    pub const fn signs(self) -> (f64, f64) {
        match self {
            Quadrant::NorthEast => (1.0, 1.0),
            Quadrant::SouthEast => (1.0, -1.0),
            Quadrant::NorthWest => (-1.0, 1.0),
            Quadrant::SouthWest => (-1.0, -1.0),
        }
    }

    /// Reflect a first-quadrant offset into this quadrant.
    #[inline]
    pub fn mirror(self, offset: Coord) -> Coord {
        let (sx, sy) = self.signs();
        coord! { x: sx * offset.x, y: sy * offset.y }
    }
}

/// Spherical approximation for displacing a geographic point by meters.
///
/// # Numerical limits
///
/// The longitude delta is divided by `cos(latitude)`, which tends to zero at
/// the poles. Reference points at or very near ±90° produce huge or infinite
/// longitudes; no correction is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarProjection {
    earth_radius: f64,
    wrap: LongitudeWrap,
}

impl PlanarProjection {
    pub fn new(earth_radius: f64, wrap: LongitudeWrap) -> Self {
        Self { earth_radius, wrap }
    }

    pub fn earth_radius(&self) -> f64 {
        self.earth_radius
    }

    pub fn wrap(&self) -> LongitudeWrap {
        self.wrap
    }

    /// Displace `reference` (x = longitude, y = latitude) by `offset` meters.
    ///
    /// # Examples
    ///
    /// ```
    /// use proximityhash::compute::geometry::PlanarProjection;
    /// use geo::{Point, coord};
    ///
    /// let projection = PlanarProjection::default();
    /// let moved = projection.to_geographic(coord! { x: 0.0, y: 111_194.9 }, Point::new(0.0, 0.0));
    /// assert!((moved.y() - 1.0).abs() < 1e-4);
    /// assert_eq!(moved.x(), 0.0);
    /// ```
    pub fn to_geographic(&self, offset: Coord, reference: Point) -> Point {
        let lat_diff = (offset.y / self.earth_radius).to_degrees();
        let lon_diff =
            (offset.x / self.earth_radius).to_degrees() / reference.y().to_radians().cos();

        let lat = reference.y() + lat_diff;
        let mut lon = reference.x() + lon_diff;

        if lon > 180.0 {
            lon -= 360.0;
        }

        let underflow = match self.wrap {
            LongitudeWrap::Normalized => lon < -180.0,
            LongitudeWrap::Legacy => lat < -180.0,
        };
        if underflow {
            lon += 360.0;
        }

        Point::new(lon, lat)
    }
}

impl Default for PlanarProjection {
    fn default() -> Self {
        Self::new(EARTH_RADIUS_METERS, LongitudeWrap::default())
    }
}

/// Displace `reference` by `offset` meters on the default sphere.
///
/// Shorthand for [`PlanarProjection::default().to_geographic`](PlanarProjection::to_geographic).
pub fn planar_to_geographic(offset: Coord, reference: Point) -> Point {
    PlanarProjection::default().to_geographic(offset, reference)
}
