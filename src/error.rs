//! Error types for geohash coverage.

use thiserror::Error;

/// Errors returned when a coverage request cannot be served.
#[derive(Error, Debug)]
pub enum ProximityError {
    #[error("Invalid geohash precision {0}: must be between 1 and 12")]
    InvalidPrecision(usize),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "Coverage grid too large: {lat_steps} x {lon_steps} candidates exceeds the limit of {limit}"
    )]
    GridTooLarge {
        lat_steps: u64,
        lon_steps: u64,
        limit: u64,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Geohash error: {0}")]
    Geohash(#[from] geohash::GeohashError),
}

/// Result type alias for coverage operations.
pub type Result<T> = std::result::Result<T, ProximityError>;
