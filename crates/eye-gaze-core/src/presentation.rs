//! Fire-and-forget hand-off of gaze labels to a presentation task.
//!
//! The classifier runs on the tracking callback; the display is owned by a
//! separate task. Labels cross over an unbounded channel: sending never
//! blocks, there is no acknowledgment, and a vanished presenter only drops
//! the update.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::domain::GazeDirection;
use crate::ports::Presenter;

/// A label copied out of the classification call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelUpdate {
    /// Direction the label was derived from.
    pub direction: GazeDirection,
    /// Display text; empty clears the display.
    pub label: String,
}

impl From<GazeDirection> for LabelUpdate {
    fn from(direction: GazeDirection) -> Self {
        Self {
            direction,
            label: direction.display_label().to_string(),
        }
    }
}

/// Sending half of the label hand-off. Cheap to clone.
#[derive(Debug, Clone)]
pub struct LabelHandoff {
    tx: Sender<LabelUpdate>,
}

impl LabelHandoff {
    /// Sends the display label for `direction` to the presentation task.
    ///
    /// Never blocks. If the receiving side is gone the update is dropped.
    pub fn dispatch(&self, direction: GazeDirection) {
        if self.tx.send(LabelUpdate::from(direction)).is_err() {
            debug!("Presenter gone, dropping label for {direction}");
        }
    }
}

/// Creates a hand-off and the receiver a presentation task drains.
#[must_use]
pub fn label_channel() -> (LabelHandoff, Receiver<LabelUpdate>) {
    let (tx, rx) = mpsc::channel();
    (LabelHandoff { tx }, rx)
}

/// Handle to a running presentation task.
#[derive(Debug)]
pub struct PresenterHandle {
    thread: JoinHandle<usize>,
}

impl PresenterHandle {
    /// Waits for the presentation task to drain and exit.
    ///
    /// The task exits once every [`LabelHandoff`] clone has been dropped.
    /// Returns the number of labels it handled.
    ///
    /// # Errors
    ///
    /// Returns an error if the presentation task panicked.
    pub fn join(self) -> Result<usize> {
        self.thread
            .join()
            .map_err(|_| anyhow::anyhow!("presentation task panicked"))
    }
}

/// Starts a presentation task that owns `presenter`.
///
/// # Errors
///
/// Returns an error if the thread cannot be spawned.
pub fn spawn_presenter<P>(mut presenter: P) -> Result<(LabelHandoff, PresenterHandle)>
where
    P: Presenter + 'static,
{
    let (handoff, rx) = label_channel();

    let thread = thread::Builder::new()
        .name("gaze-presenter".into())
        .spawn(move || {
            let mut handled = 0usize;
            for update in rx {
                if let Err(e) = presenter.show(&update.label) {
                    warn!("Failed to present {}: {e:#}", update.direction);
                }
                handled += 1;
            }
            debug!("Presentation task finished after {handled} labels");
            handled
        })
        .context("Failed to spawn presentation task")?;

    Ok((handoff, PresenterHandle { thread }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder {
        shown: Arc<Mutex<Vec<String>>>,
    }

    impl Presenter for Recorder {
        fn show(&mut self, label: &str) -> Result<()> {
            self.shown.lock().unwrap().push(label.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl Presenter for Broken {
        fn show(&mut self, _label: &str) -> Result<()> {
            anyhow::bail!("display detached")
        }
    }

    #[test]
    fn test_labels_arrive_in_order() {
        let recorder = Recorder::default();
        let shown = Arc::clone(&recorder.shown);
        let (handoff, handle) = spawn_presenter(recorder).unwrap();

        handoff.dispatch(GazeDirection::Up);
        handoff.dispatch(GazeDirection::Right);
        handoff.dispatch(GazeDirection::None);
        drop(handoff);

        assert_eq!(handle.join().unwrap(), 3);
        assert_eq!(
            *shown.lock().unwrap(),
            vec!["Looking UP", "Looking LEFT", ""]
        );
    }

    #[test]
    fn test_cloned_handoffs_share_task() {
        let recorder = Recorder::default();
        let shown = Arc::clone(&recorder.shown);
        let (handoff, handle) = spawn_presenter(recorder).unwrap();

        let other = handoff.clone();
        let worker = thread::spawn(move || other.dispatch(GazeDirection::Down));
        worker.join().unwrap();
        drop(handoff);

        assert_eq!(handle.join().unwrap(), 1);
        assert_eq!(*shown.lock().unwrap(), vec!["Looking DOWN"]);
    }

    #[test]
    fn test_dispatch_after_receiver_dropped_is_silent() {
        let (handoff, rx) = label_channel();
        drop(rx);
        handoff.dispatch(GazeDirection::Left);
    }

    #[test]
    fn test_presenter_errors_do_not_stop_task() {
        let (handoff, handle) = spawn_presenter(Broken).unwrap();
        handoff.dispatch(GazeDirection::Up);
        handoff.dispatch(GazeDirection::Down);
        drop(handoff);

        assert_eq!(handle.join().unwrap(), 2);
    }

    #[test]
    fn test_label_update_from_direction() {
        let update = LabelUpdate::from(GazeDirection::Left);
        assert_eq!(update.label, "Looking RIGHT");
        assert_eq!(update.direction, GazeDirection::Left);
    }
}
