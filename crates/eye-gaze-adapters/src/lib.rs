//! Eye Gaze Adapters - External adapters for eye-gaze.
//!
//! This crate provides adapters for:
//! - The JSON Lines recording format
//! - Filesystem snapshot source

pub mod fs;
pub mod recording;

pub use fs::FsSnapshotSource;
pub use recording::{parse_line, RecordingReader};
