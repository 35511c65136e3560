//! Gaze-direction classification.
//!
//! Averages paired eye blend shapes into four directional scores and picks a
//! direction with an ordered scan:
//! - Up, Down, Right (inner turn), Left (outer turn), in that order
//! - every score strictly above the threshold overwrites the result
//! - the last qualifying direction wins; nothing qualifying yields `None`
//!
//! This is not a max-of-four: when several scores qualify,
//! the later one in the fixed order is reported even if it is smaller.

use crate::domain::{
    BlendShapeKey, BlendShapeSnapshot, DirectionalScores, GazeConfig, GazeDirection, GazeError,
    Threshold,
};

impl DirectionalScores {
    /// Computes the four scores from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`GazeError::MissingCoefficient`] for the first absent key.
    pub fn from_snapshot(snapshot: &BlendShapeSnapshot) -> Result<Self, GazeError> {
        snapshot.validate()?;

        let mean = |a: BlendShapeKey, b: BlendShapeKey| -> Result<f32, GazeError> {
            Ok((snapshot.require(a)? + snapshot.require(b)?) / 2.0)
        };

        Ok(Self {
            up: mean(BlendShapeKey::EyeLookUpRight, BlendShapeKey::EyeLookUpLeft)?,
            down: mean(BlendShapeKey::EyeLookDownRight, BlendShapeKey::EyeLookDownLeft)?,
            inner_turn: mean(BlendShapeKey::EyeLookInRight, BlendShapeKey::EyeLookOutLeft)?,
            outer_turn: mean(BlendShapeKey::EyeLookOutRight, BlendShapeKey::EyeLookInLeft)?,
        })
    }

    /// Applies the ordered last-wins scan against `threshold`.
    #[must_use]
    pub fn direction(&self, threshold: Threshold) -> GazeDirection {
        let limit = threshold.get();
        let ordered = [
            (self.up, GazeDirection::Up),
            (self.down, GazeDirection::Down),
            (self.inner_turn, GazeDirection::Right),
            (self.outer_turn, GazeDirection::Left),
        ];

        let mut result = GazeDirection::None;
        for (score, direction) in ordered {
            if score > limit {
                result = direction;
            }
        }
        result
    }
}

/// Classifies one snapshot against `threshold`.
///
/// # Errors
///
/// Returns [`GazeError::MissingCoefficient`] if any eye key is absent. No
/// default is substituted for a missing coefficient.
pub fn classify(
    snapshot: &BlendShapeSnapshot,
    threshold: Threshold,
) -> Result<GazeDirection, GazeError> {
    DirectionalScores::from_snapshot(snapshot).map(|scores| scores.direction(threshold))
}

/// Stateless classifier bound to an immutable configuration.
///
/// Holds no mutable state, so one instance can be shared across threads and
/// called reentrantly.
#[derive(Debug, Clone, Copy, Default)]
pub struct GazeClassifier {
    config: GazeConfig,
}

impl GazeClassifier {
    /// Creates a classifier with the given configuration.
    #[must_use]
    pub const fn new(config: GazeConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this classifier was built with.
    #[must_use]
    pub const fn config(&self) -> &GazeConfig {
        &self.config
    }

    /// Classifies one snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`GazeError::MissingCoefficient`] if any eye key is absent.
    pub fn classify(&self, snapshot: &BlendShapeSnapshot) -> Result<GazeDirection, GazeError> {
        classify(snapshot, self.config.threshold)
    }

    /// Classifies one snapshot and also returns the scores behind it.
    ///
    /// # Errors
    ///
    /// Returns [`GazeError::MissingCoefficient`] if any eye key is absent.
    pub fn classify_with_scores(
        &self,
        snapshot: &BlendShapeSnapshot,
    ) -> Result<(GazeDirection, DirectionalScores), GazeError> {
        let scores = DirectionalScores::from_snapshot(snapshot)?;
        Ok((scores.direction(self.config.threshold), scores))
    }
}
