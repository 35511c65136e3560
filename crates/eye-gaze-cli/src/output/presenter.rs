//! Terminal presenter adapter.

use std::io::{self, Write};

use anyhow::Result;
use eye_gaze_core::Presenter;

/// Presenter that prints each label on its own line.
///
/// An empty line stands for a cleared display.
pub struct TerminalPresenter {
    writer: Box<dyn Write + Send>,
}

impl TerminalPresenter {
    /// Creates a presenter writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Creates a presenter writing to the given writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self { writer }
    }
}

impl Presenter for TerminalPresenter {
    fn show(&mut self, label: &str) -> Result<()> {
        writeln!(self.writer, "{label}")?;
        self.writer.flush()?;
        Ok(())
    }
}
