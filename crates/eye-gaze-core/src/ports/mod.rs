//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the domain core and external adapters.

mod presenter;
mod progress;
mod result_output;
mod snapshot_source;

pub use presenter::Presenter;
pub use progress::{ProgressEvent, ProgressSink};
pub use result_output::ResultOutput;
pub use snapshot_source::SnapshotSource;
