//! Geohash coverage of a circular region.
//!
//! The march walks a grid of half-cell steps over the first quadrant of the
//! circle only. Every accepted grid position yields one centroid, which is
//! mirrored into all four quadrants, projected to geographic coordinates and
//! encoded. Keys produced by more than one mirror collapse in the result map.
//!
//! ```text
//!          y (north)
//!          │
//!   (-,+)  │  (+,+)   <- marched: i * half_height, j * half_width
//!  ────────┼────────  x (east)
//!   (-,-)  │  (+,-)
//!          │
//! ```

use crate::compute::cell_size::{CellSize, cell_size};
use crate::compute::geometry::{PlanarProjection, Quadrant, centroid, in_circle};
use crate::compute::validation::{validate_center, validate_precision, validate_radius};
use crate::config::Config;
use crate::error::{ProximityError, Result};
use geo::{Coord, Point, coord};
use rustc_hash::{FxHashMap, FxHashSet};

/// A circular region and the geohash precision to cover it with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageQuery {
    /// Center of the circle (x = longitude, y = latitude, degrees)
    pub center: Point<f64>,
    /// Radius in meters
    pub radius: f64,
    /// Geohash length (1-12)
    pub precision: usize,
}

impl CoverageQuery {
    /// Create a query from latitude/longitude in degrees.
    pub fn new(latitude: f64, longitude: f64, radius: f64, precision: usize) -> Self {
        Self {
            center: Point::new(longitude, latitude),
            radius,
            precision,
        }
    }

    /// Create a query from a `geo::Point` (x = longitude, y = latitude).
    pub fn from_point(center: Point<f64>, radius: f64, precision: usize) -> Self {
        Self {
            center,
            radius,
            precision,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    pub fn longitude(&self) -> f64 {
        self.center.x()
    }

    /// Check precision, center and radius.
    pub fn validate(&self) -> Result<()> {
        validate_precision(self.precision)?;
        validate_center(&self.center)?;
        validate_radius(self.radius)
    }

    /// Geohash of the center point itself at the query precision.
    ///
    /// # Examples
    ///
    /// ```
    /// use proximityhash::CoverageQuery;
    ///
    /// let query = CoverageQuery::new(51.5074, -0.1278, 1000.0, 5);
    /// assert_eq!(query.center_geohash().unwrap(), "gcpvj");
    /// ```
    pub fn center_geohash(&self) -> Result<String> {
        self.validate()?;
        let coord = geohash::Coord {
            x: self.center.x(),
            y: self.center.y(),
        };
        Ok(geohash::encode(coord, self.precision)?)
    }
}

/// The half-cell grid marched over the first quadrant of a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageGrid {
    half: CellSize,
    radius: f64,
    lat_steps: u64,
    lon_steps: u64,
}

impl CoverageGrid {
    /// Build the grid for a radius in meters at a geohash precision.
    ///
    /// # Examples
    ///
    /// ```
    /// use proximityhash::CoverageGrid;
    ///
    /// // Precision 5 cells are 4900 m square, so the grid steps by 2450 m.
    /// let grid = CoverageGrid::new(5000.0, 5).unwrap();
    /// assert_eq!(grid.lat_steps(), 3);
    /// assert_eq!(grid.lon_steps(), 3);
    /// ```
    pub fn new(radius: f64, precision: usize) -> Result<Self> {
        validate_radius(radius)?;
        let half = cell_size(precision)?.half();

        Ok(Self {
            half,
            radius,
            lat_steps: (radius / half.height).ceil() as u64,
            lon_steps: (radius / half.width).ceil() as u64,
        })
    }

    /// Grid step size, half of the calibrated cell in each direction.
    pub fn half_cell(&self) -> CellSize {
        self.half
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn lat_steps(&self) -> u64 {
        self.lat_steps
    }

    pub fn lon_steps(&self) -> u64 {
        self.lon_steps
    }

    /// Number of grid positions the march will test.
    pub fn candidate_count(&self) -> u64 {
        self.lat_steps.saturating_mul(self.lon_steps)
    }

    /// All grid positions, row by row from the center outwards.
    pub fn candidates(&self) -> impl Iterator<Item = Coord> + '_ {
        let half = self.half;
        (0..self.lat_steps).flat_map(move |i| {
            (0..self.lon_steps).map(move |j| coord! {
                x: half.width * j as f64,
                y: half.height * i as f64,
            })
        })
    }

    /// Centroids of the grid cells whose corner lies inside the circle.
    pub fn accepted_centroids(&self) -> impl Iterator<Item = Coord> + '_ {
        let origin = coord! { x: 0.0, y: 0.0 };
        self.candidates()
            .filter(move |corner| in_circle(*corner, origin, self.radius))
            .map(move |corner| centroid(corner, self.half.height, self.half.width))
    }
}

/// Counters collected while covering one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageStats {
    pub precision: usize,
    pub lat_steps: u64,
    pub lon_steps: u64,
    /// Grid positions tested against the circle
    pub candidates_tested: u64,
    /// Grid positions inside the circle
    pub cells_accepted: u64,
    /// Mirrored points successfully encoded (before deduplication)
    pub points_encoded: u64,
    /// Mirrored points the codec rejected as out of range
    pub points_skipped: u64,
    /// Distinct geohashes in the result
    pub unique_hashes: usize,
}

/// Computes geohash coverage for circular regions.
///
/// A hasher is immutable once built and can be shared across threads.
///
/// # Examples
///
/// ```rust
/// use proximityhash::{CoverageQuery, ProximityHasher};
///
/// let hasher = ProximityHasher::new();
/// let query = CoverageQuery::new(51.5074, -0.1278, 1000.0, 7);
///
/// let cells = hasher.cover(&query, 1.0)?;
/// assert!(!cells.is_empty());
/// assert!(cells.keys().all(|hash| hash.len() == 7));
/// # Ok::<(), proximityhash::ProximityError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ProximityHasher {
    config: Config,
    projection: PlanarProjection,
}

impl ProximityHasher {
    /// Create a hasher with the default configuration.
    pub fn new() -> Self {
        let config = Config::default();
        let projection = PlanarProjection::new(config.earth_radius_m, config.longitude_wrap);
        Self { config, projection }
    }

    /// Create a hasher with a custom configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().map_err(ProximityError::InvalidConfig)?;
        let projection = PlanarProjection::new(config.earth_radius_m, config.longitude_wrap);
        Ok(Self { config, projection })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn projection(&self) -> &PlanarProjection {
        &self.projection
    }

    /// Every geohash covering the query region, each mapped to `initial`.
    pub fn cover<V: Clone>(
        &self,
        query: &CoverageQuery,
        initial: V,
    ) -> Result<FxHashMap<String, V>> {
        self.cover_with_stats(query, initial).map(|(cells, _)| cells)
    }

    /// Every geohash covering the query region.
    pub fn cover_set(&self, query: &CoverageQuery) -> Result<FxHashSet<String>> {
        let mut cells = FxHashSet::default();
        self.march(query, |hash| {
            cells.insert(hash);
        })?;
        Ok(cells)
    }

    /// Like [`cover`](Self::cover), also returning counters for the run.
    pub fn cover_with_stats<V: Clone>(
        &self,
        query: &CoverageQuery,
        initial: V,
    ) -> Result<(FxHashMap<String, V>, CoverageStats)> {
        let mut cells = FxHashMap::default();
        let mut stats = self.march(query, |hash| {
            cells.insert(hash, initial.clone());
        })?;
        stats.unique_hashes = cells.len();
        Ok((cells, stats))
    }

    fn march<F>(&self, query: &CoverageQuery, mut emit: F) -> Result<CoverageStats>
    where
        F: FnMut(String),
    {
        query.validate()?;

        let grid = CoverageGrid::new(query.radius, query.precision)?;
        let candidates = grid.candidate_count();
        let limit = self.config.max_grid_cells;

        if candidates > limit {
            return Err(ProximityError::GridTooLarge {
                lat_steps: grid.lat_steps(),
                lon_steps: grid.lon_steps(),
                limit,
            });
        }

        if candidates > limit / 4 {
            log::warn!(
                "Covering {}m at precision {} tests {} grid positions",
                query.radius,
                query.precision,
                candidates
            );
        }

        if query.latitude().abs() == 90.0 {
            log::warn!(
                "Coverage centered on a pole: longitude offsets are undefined and will be skipped"
            );
        }

        let mut stats = CoverageStats {
            precision: query.precision,
            lat_steps: grid.lat_steps(),
            lon_steps: grid.lon_steps(),
            candidates_tested: candidates,
            ..Default::default()
        };

        for offset in grid.accepted_centroids() {
            stats.cells_accepted += 1;

            for quadrant in Quadrant::ALL {
                let point = self
                    .projection
                    .to_geographic(quadrant.mirror(offset), query.center);
                let coord = geohash::Coord {
                    x: point.x(),
                    y: point.y(),
                };

                match geohash::encode(coord, query.precision) {
                    Ok(hash) => {
                        stats.points_encoded += 1;
                        emit(hash);
                    }
                    Err(e) => {
                        stats.points_skipped += 1;
                        log::debug!(
                            "Skipping {:?} point ({}, {}): {}",
                            quadrant,
                            point.y(),
                            point.x(),
                            e
                        );
                    }
                }
            }
        }

        log::debug!(
            "Covered {}m around ({}, {}) at precision {}: {} cells, {} points encoded, {} skipped",
            query.radius,
            query.latitude(),
            query.longitude(),
            query.precision,
            stats.cells_accepted,
            stats.points_encoded,
            stats.points_skipped
        );

        Ok(stats)
    }
}

impl Default for ProximityHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Geohashes of `precision` covering the circle of `radius` meters around
/// (`latitude`, `longitude`), each mapped to `initial`.
///
/// # Errors
///
/// Fails with [`ProximityError::InvalidPrecision`] outside `1..=12`,
/// [`ProximityError::InvalidInput`] for an invalid center or a negative
/// radius, and [`ProximityError::GridTooLarge`] when the radius is too large
/// for the precision.
///
/// # Examples
///
/// ```
/// use proximityhash::create_geohash;
///
/// let cells = create_geohash(0.0, 0.0, 5000.0, true, 5).unwrap();
/// assert!(cells.values().all(|&marker| marker));
/// assert!(cells.keys().all(|hash| hash.len() == 5));
///
/// assert!(create_geohash(0.0, 0.0, 5000.0, true, 13).is_err());
/// ```
pub fn create_geohash<V: Clone>(
    latitude: f64,
    longitude: f64,
    radius: f64,
    initial: V,
    precision: usize,
) -> Result<FxHashMap<String, V>> {
    let query = CoverageQuery::new(latitude, longitude, radius, precision);
    ProximityHasher::new().cover(&query, initial)
}

/// Set form of [`create_geohash`].
pub fn create_geohash_set(
    latitude: f64,
    longitude: f64,
    radius: f64,
    precision: usize,
) -> Result<FxHashSet<String>> {
    let query = CoverageQuery::new(latitude, longitude, radius, precision);
    ProximityHasher::new().cover_set(&query)
}
