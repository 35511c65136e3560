//! Classification result types.

use serde::{Deserialize, Serialize};

use super::GazeDirection;

/// The four averaged directional scores of one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalScores {
    /// Mean of both "look up" coefficients.
    pub up: f32,
    /// Mean of both "look down" coefficients.
    pub down: f32,
    /// Mean of right-eye-in and left-eye-out; reported as [`GazeDirection::Right`].
    pub inner_turn: f32,
    /// Mean of right-eye-out and left-eye-in; reported as [`GazeDirection::Left`].
    pub outer_turn: f32,
}

/// Classification of a single frame, as written by output adapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// Origin of the frame.
    pub source: String,
    /// Frame number within the source.
    pub frame: u64,
    /// Timestamp of classification (RFC 3339).
    pub timestamp: String,
    /// Classified direction.
    pub direction: GazeDirection,
    /// Display label for the direction (empty for none).
    pub label: String,
    /// Scores the direction was derived from.
    pub scores: DirectionalScores,
}

impl ClassificationRecord {
    /// Creates a record, deriving the label from the direction.
    pub fn new(
        source: impl Into<String>,
        frame: u64,
        timestamp: impl Into<String>,
        direction: GazeDirection,
        scores: DirectionalScores,
    ) -> Self {
        Self {
            source: source.into(),
            frame,
            timestamp: timestamp.into(),
            direction,
            label: direction.display_label().to_string(),
            scores,
        }
    }
}
