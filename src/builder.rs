//! Hasher builder for flexible configuration
//!
//! Collects projection and safety settings and validates them once at
//! [`build`](ProximityHasherBuilder::build) time.

use crate::config::{Config, LongitudeWrap};
use crate::coverage::ProximityHasher;
use crate::error::Result;

/// Builder for a [`ProximityHasher`].
#[derive(Debug, Clone, Default)]
pub struct ProximityHasherBuilder {
    config: Config,
}

impl ProximityHasherBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sphere radius in meters for the planar projection.
    pub fn earth_radius(mut self, radius_m: f64) -> Self {
        self.config.earth_radius_m = radius_m;
        self
    }

    pub fn longitude_wrap(mut self, wrap: LongitudeWrap) -> Self {
        self.config.longitude_wrap = wrap;
        self
    }

    /// Maximum number of grid positions a single request may test.
    pub fn max_grid_cells(mut self, limit: u64) -> Self {
        self.config.max_grid_cells = limit;
        self
    }

    /// Validate the configuration and build the hasher.
    pub fn build(self) -> Result<ProximityHasher> {
        ProximityHasher::with_config(self.config)
    }
}
