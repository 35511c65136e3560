//! Progress reporting port for UI integration.

use crate::domain::ClassificationRecord;

/// Events emitted while classifying a batch of frames.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Classification started for a frame.
    Started {
        /// Origin of the frame.
        source: String,
        /// Frame number within the source.
        frame: u64,
        /// Index in the batch (0-based).
        index: usize,
        /// Total frames in batch, if known.
        total: Option<usize>,
    },
    /// A frame was classified.
    Completed {
        /// The classification record.
        record: ClassificationRecord,
    },
    /// A frame was skipped because it could not be read or classified.
    Skipped {
        /// Origin of the frame, when the frame could be attributed to one.
        /// Unreadable input carries its origin in `reason`.
        source: Option<String>,
        /// Frame number, if the frame could be read at all.
        frame: Option<u64>,
        /// Reason for skipping.
        reason: String,
    },
    /// All frames have been processed.
    Finished {
        /// Frames classified successfully.
        classified: usize,
        /// Frames skipped.
        skipped: usize,
    },
}

/// Port for receiving progress events.
pub trait ProgressSink: Send + Sync {
    /// Called when a progress event occurs.
    fn on_event(&self, event: ProgressEvent);
}
