//! Geohash coverage of circular regions.
//!
//! Given a center, a radius in meters and a geohash precision, compute every
//! geohash cell of that precision whose representative point falls inside the
//! circle. Storing one geohash per location and querying the covering set
//! turns a radius search into a handful of key lookups.
//!
//! ```rust
//! use proximityhash::create_geohash;
//!
//! // Every precision-7 cell within 1 km of central London, scored 1.0
//! let cells = create_geohash(51.5074, -0.1278, 1000.0, 1.0, 7)?;
//! assert!(cells.keys().all(|hash| hash.len() == 7));
//! # Ok::<(), proximityhash::ProximityError>(())
//! ```
//!
//! ## Approximation
//! - Cell sizes come from a fixed calibration table, not from the geohash
//!   bit layout, so coverage is looser away from the equator.
//! - Offsets are projected on a sphere; near the poles the longitude offset
//!   diverges and the affected points are skipped.

pub mod builder;
pub mod compute;
pub mod config;
pub mod coverage;
pub mod error;

pub use builder::ProximityHasherBuilder;
pub use config::{Config, EARTH_RADIUS_METERS, LongitudeWrap};
pub use coverage::{
    CoverageGrid, CoverageQuery, CoverageStats, ProximityHasher, create_geohash,
    create_geohash_set,
};
pub use error::{ProximityError, Result};

pub use geo::{Coord, Point};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{ProximityError, ProximityHasher, ProximityHasherBuilder, Result};

    pub use crate::{CoverageQuery, CoverageStats, create_geohash, create_geohash_set};

    pub use crate::{Config, LongitudeWrap};

    pub use geo::Point;
}
