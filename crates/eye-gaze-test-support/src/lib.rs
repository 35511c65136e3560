//! Test support utilities for eye-gaze.
//!
//! Provides mocks, synthetic snapshot builders, and utilities for testing
//! the gaze classification pipeline.
//!
//! # Example
//!
//! ```
//! use eye_gaze_core::{GazeClassifier, GazeDirection};
//! use eye_gaze_test_support::{MockSnapshotSource, SnapshotBuilder};
//!
//! // Create synthetic snapshots
//! let up = SnapshotBuilder::looking(GazeDirection::Up);
//! let centered = SnapshotBuilder::centered();
//! assert_eq!(
//!     GazeClassifier::default().classify(&up.clone().build()),
//!     Ok(GazeDirection::Up)
//! );
//!
//! // Create mock snapshot source
//! let source = MockSnapshotSource::new(vec![up.frame("mock", 0), centered.frame("mock", 1)]);
//! ```

mod builders;
mod mocks;

pub use builders::{recording, SnapshotBuilder};
pub use mocks::{MockPresenter, MockProgressSink, MockResultOutput, MockSnapshotSource};
