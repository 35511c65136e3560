//! Mock implementations of core port traits.

use std::sync::{Arc, Mutex, PoisonError};

use eye_gaze_core::ports::{
    Presenter, ProgressEvent, ProgressSink, ResultOutput, SnapshotSource,
};
use eye_gaze_core::{ClassificationRecord, FaceFrame};

/// Mock implementation of `SnapshotSource` for testing.
///
/// Yields pre-built frames (or read errors) and tracks iteration for assertions.
pub struct MockSnapshotSource {
    frames: Vec<Result<FaceFrame, String>>,
    iteration_count: Arc<Mutex<usize>>,
}

impl MockSnapshotSource {
    /// Creates a new mock source with the given frames.
    #[must_use]
    pub fn new(frames: Vec<FaceFrame>) -> Self {
        Self::with_errors(frames.into_iter().map(Ok).collect())
    }

    /// Creates a mock source whose items may be read errors.
    #[must_use]
    pub fn with_errors(frames: Vec<Result<FaceFrame, String>>) -> Self {
        Self {
            frames,
            iteration_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Creates an empty mock source.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns the number of times the source has been iterated.
    #[must_use]
    pub fn iteration_count(&self) -> usize {
        *self
            .iteration_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotSource for MockSnapshotSource {
    fn frames(&self) -> Box<dyn Iterator<Item = anyhow::Result<FaceFrame>> + Send + '_> {
        if let Ok(mut c) = self.iteration_count.lock() {
            *c += 1;
        }
        Box::new(
            self.frames
                .iter()
                .map(|item| item.clone().map_err(|e| anyhow::anyhow!(e))),
        )
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.frames.len())
    }
}

/// Mock implementation of `ResultOutput` for testing.
///
/// Captures records for later assertions.
pub struct MockResultOutput {
    records: Arc<Mutex<Vec<ClassificationRecord>>>,
    flush_count: Arc<Mutex<usize>>,
}

impl MockResultOutput {
    /// Creates a new mock output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            flush_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Returns all captured records.
    #[must_use]
    pub fn records(&self) -> Vec<ClassificationRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of times `flush()` was called.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        *self
            .flush_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockResultOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultOutput for MockResultOutput {
    fn write(&self, record: &ClassificationRecord) -> anyhow::Result<()> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        if let Ok(mut c) = self.flush_count.lock() {
            *c += 1;
        }
        Ok(())
    }
}

/// Mock implementation of `ProgressSink` for testing.
///
/// Captures events for later assertions.
pub struct MockProgressSink {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressSink {
    /// Creates a new mock progress sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all captured events.
    #[must_use]
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of `Completed` events.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Completed { .. }))
            .count()
    }

    /// Returns the number of `Skipped` events.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Skipped { .. }))
            .count()
    }

    /// Returns the final counts from the `Finished` event, if any.
    #[must_use]
    pub fn finished_counts(&self) -> Option<(usize, usize)> {
        self.events().iter().find_map(|e| match e {
            ProgressEvent::Finished {
                classified,
                skipped,
            } => Some((*classified, *skipped)),
            _ => None,
        })
    }
}

impl Default for MockProgressSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for MockProgressSink {
    fn on_event(&self, event: ProgressEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

/// Mock implementation of `Presenter` for testing.
///
/// Clones share the captured labels, so a test can keep one clone while the
/// other is moved into a presentation task.
#[derive(Clone, Default)]
pub struct MockPresenter {
    shown: Arc<Mutex<Vec<String>>>,
}

impl MockPresenter {
    /// Creates a new mock presenter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every label shown so far, in order.
    #[must_use]
    pub fn shown(&self) -> Vec<String> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Presenter for MockPresenter {
    fn show(&mut self, label: &str) -> anyhow::Result<()> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(label.to_string());
        Ok(())
    }
}
