//! Configuration for coverage generation.
use serde::de::Error;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters used by the spherical projection.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// How converted longitudes are brought back into `[-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LongitudeWrap {
    /// Wrap both overflow (`> 180`) and underflow (`< -180`).
    #[default]
    Normalized,
    /// Wrap overflow only. The underflow branch is keyed on the latitude
    /// dropping below -180, which never happens, so western overflow past the
    /// antimeridian is left as is and those points fail to encode.
    Legacy,
}

/// Coverage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Sphere radius for planar to geographic conversion
    #[serde(default = "Config::default_earth_radius")]
    pub earth_radius_m: f64,

    #[serde(default)]
    pub longitude_wrap: LongitudeWrap,

    /// Upper bound on `lat_steps * lon_steps` for a single request
    #[serde(default = "Config::default_max_grid_cells")]
    pub max_grid_cells: u64,
}

impl Config {
    const fn default_earth_radius() -> f64 {
        EARTH_RADIUS_METERS
    }

    const fn default_max_grid_cells() -> u64 {
        1 << 24
    }

    pub fn with_earth_radius(mut self, radius_m: f64) -> Self {
        assert!(
            radius_m.is_finite() && radius_m > 0.0,
            "Earth radius must be a positive finite number"
        );
        self.earth_radius_m = radius_m;
        self
    }

    pub fn with_longitude_wrap(mut self, wrap: LongitudeWrap) -> Self {
        self.longitude_wrap = wrap;
        self
    }

    pub fn with_max_grid_cells(mut self, limit: u64) -> Self {
        assert!(limit > 0, "Grid cell limit must be greater than zero");

        if limit > 1 << 32 {
            log::warn!(
                "Grid cell limit of {} allows requests that can run for a very long time",
                limit
            );
        }

        self.max_grid_cells = limit;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.earth_radius_m.is_finite() || self.earth_radius_m <= 0.0 {
            return Err(format!(
                "Earth radius must be a positive finite number, got: {}",
                self.earth_radius_m
            ));
        }

        if self.max_grid_cells == 0 {
            return Err("Grid cell limit must be greater than zero".to_string());
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            earth_radius_m: Self::default_earth_radius(),
            longitude_wrap: LongitudeWrap::default(),
            max_grid_cells: Self::default_max_grid_cells(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.earth_radius_m, 6_371_000.0);
        assert_eq!(config.longitude_wrap, LongitudeWrap::Normalized);
        assert_eq!(config.max_grid_cells, 16_777_216);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default()
            .with_longitude_wrap(LongitudeWrap::Legacy)
            .with_max_grid_cells(1_000)
            .with_earth_radius(6_378_137.0);

        let json = config.to_json().unwrap();
        assert!(json.contains("\"legacy\""));

        let deserialized = Config::from_json(&json).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{ "longitude_wrap": "legacy" }"#).unwrap();
        assert_eq!(config.longitude_wrap, LongitudeWrap::Legacy);
        assert_eq!(config.earth_radius_m, EARTH_RADIUS_METERS);
        assert_eq!(config.max_grid_cells, 1 << 24);
    }

    #[test]
    fn test_config_rejects_invalid_json() {
        assert!(Config::from_json(r#"{ "earth_radius_m": -1.0 }"#).is_err());
        assert!(Config::from_json(r#"{ "max_grid_cells": 0 }"#).is_err());
        assert!(Config::from_json(r#"{ "unknown_field": 1 }"#).is_err());
    }

    #[test]
    #[should_panic(expected = "Grid cell limit must be greater than zero")]
    fn test_zero_grid_limit_panics() {
        let _ = Config::default().with_max_grid_cells(0);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_config_toml() {
        let config =
            Config::from_toml("longitude_wrap = \"legacy\"\nmax_grid_cells = 42\n").unwrap();
        assert_eq!(config.longitude_wrap, LongitudeWrap::Legacy);
        assert_eq!(config.max_grid_cells, 42);

        let toml_str = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&toml_str).unwrap(), config);
    }
}
