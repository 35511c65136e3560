//! Tracking updates as delivered by a snapshot source.

use super::BlendShapeSnapshot;

/// One tracking update: a snapshot plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceFrame {
    /// Origin of the frame (recording path or `stdin`).
    pub source: String,
    /// Upstream frame number, or the line index when none was recorded.
    pub frame: u64,
    /// Eye blend-shape coefficients for this update.
    pub snapshot: BlendShapeSnapshot,
}

impl FaceFrame {
    /// Creates a frame.
    pub fn new(source: impl Into<String>, frame: u64, snapshot: BlendShapeSnapshot) -> Self {
        Self {
            source: source.into(),
            frame,
            snapshot,
        }
    }
}
