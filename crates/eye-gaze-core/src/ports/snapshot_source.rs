//! Snapshot source port for receiving tracking updates.

use crate::domain::FaceFrame;

/// Port for a face-tracking collaborator that yields one frame per update.
pub trait SnapshotSource: Send + Sync {
    /// Returns an iterator over frames from this source.
    ///
    /// # Errors
    ///
    /// Individual items may be errors if a frame cannot be read. A frame
    /// with missing coefficients is not a read error; it is yielded as-is.
    fn frames(&self) -> Box<dyn Iterator<Item = anyhow::Result<FaceFrame>> + Send + '_>;

    /// Returns the total number of frames, if known.
    fn count_hint(&self) -> Option<usize>;
}
