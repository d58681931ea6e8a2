// src/math/geometry/sphere/config.rs
use crate::math::error::{MathError, MathResult};
use serde::{Deserialize, Serialize};

/// Höchste zulässige Unterteilungsstufe (≈ 3,4 · 10^8 Dreiecke).
pub const MAX_RECURSION_LEVEL: u32 = 12;

/// Ab dieser Stufe wird vor dem Speicherbedarf gewarnt.
pub const HIGH_RECURSION_WARNING_LEVEL: u32 = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeodesicConfig {
    pub radius: f32,
    pub recursion_level: u32,
    /// Unterhalb dieser Elementanzahl wird sequentiell gerechnet; 0 heißt immer parallel.
    pub parallel_threshold: usize,
}

impl GeodesicConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_recursion_level(mut self, level: u32) -> Self {
        self.recursion_level = level;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        validate_radius(self.radius)?;
        validate_recursion_level(self.recursion_level)
    }
}

impl Default for GeodesicConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            recursion_level: 2,
            parallel_threshold: 1024,
        }
    }
}

pub(crate) fn validate_radius(radius: f32) -> MathResult<()> {
    // NaN fällt hier ebenfalls durch
    if !(radius.is_finite() && radius > 0.0) {
        return Err(MathError::invalid(format!(
            "Sphere radius must be positive and finite, got {radius}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_recursion_level(level: u32) -> MathResult<()> {
    if level > MAX_RECURSION_LEVEL {
        return Err(MathError::invalid(format!(
            "Recursion level must be between 0 and {MAX_RECURSION_LEVEL}, got {level}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GeodesicConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.radius, 1.0);
        assert_eq!(config.recursion_level, 2);
    }

    #[test]
    fn test_builder() {
        let config = GeodesicConfig::new()
            .with_radius(6371.0)
            .with_recursion_level(5)
            .with_parallel_threshold(64);
        assert_eq!(config.radius, 6371.0);
        assert_eq!(config.recursion_level, 5);
        assert_eq!(config.parallel_threshold, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_radius() {
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = GeodesicConfig::new()
                .with_radius(radius)
                .validate()
                .unwrap_err();
            assert!(err.is_input_error(), "Radius {radius} sollte abgelehnt werden");
        }
    }

    #[test]
    fn test_recursion_level_bounds() {
        assert!(
            GeodesicConfig::new()
                .with_recursion_level(MAX_RECURSION_LEVEL)
                .validate()
                .is_ok()
        );
        let err = GeodesicConfig::new()
            .with_recursion_level(MAX_RECURSION_LEVEL + 1)
            .validate()
            .unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_zero_parallel_threshold_is_valid() {
        let config = GeodesicConfig::new().with_parallel_threshold(0);
        assert!(config.validate().is_ok());
        assert_eq!(config.parallel_threshold, 0);
    }
}
