//! Errors raised by gaze classification.

use thiserror::Error;

use super::BlendShapeKey;

/// Recoverable classification and configuration errors.
///
/// Both variants are local to a single frame or a single configuration
/// attempt; callers skip the frame or keep the previous configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GazeError {
    /// A required blend-shape coefficient was absent from the snapshot.
    #[error("missing blend-shape coefficient: {0}")]
    MissingCoefficient(BlendShapeKey),

    /// The threshold was NaN or infinite.
    #[error("threshold must be finite, got {0}")]
    InvalidThreshold(f32),
}
