//! Classifier threshold and configuration.

use serde::{Serialize, Serializer};

use super::GazeError;

/// Minimum directional score that registers a gaze direction.
///
/// Always finite. Values outside (0, 1) are accepted as given.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f32);

impl Threshold {
    /// Threshold used when nothing is configured.
    pub const DEFAULT: Self = Self(0.1);

    /// Creates a threshold.
    ///
    /// # Errors
    ///
    /// Returns [`GazeError::InvalidThreshold`] for NaN or infinite values.
    pub fn new(value: f32) -> Result<Self, GazeError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(GazeError::InvalidThreshold(value))
        }
    }

    /// Raw threshold value.
    #[must_use]
    pub const fn get(self) -> f32 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f32> for Threshold {
    type Error = GazeError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Threshold {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.0)
    }
}

/// Immutable classifier configuration, fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GazeConfig {
    /// Threshold shared by all four directional comparisons.
    pub threshold: Threshold,
}

impl GazeConfig {
    /// Creates a configuration with the given threshold.
    #[must_use]
    pub const fn new(threshold: Threshold) -> Self {
        Self { threshold }
    }
}
