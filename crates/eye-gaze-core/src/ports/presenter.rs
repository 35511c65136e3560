//! Presentation port for showing gaze labels.

/// Port for the surface that displays the current gaze label.
///
/// A presenter is owned by a single presentation task and is only called
/// from that task; see [`crate::presentation::spawn_presenter`].
pub trait Presenter: Send {
    /// Shows `label`. An empty label clears the display.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be updated. The presentation
    /// task logs the error and keeps running.
    fn show(&mut self, label: &str) -> anyhow::Result<()>;
}
