//! Output formatting for CLI.

mod json;
mod presenter;
mod progress;

pub use json::{JsonOutput, OutputFormat};
pub use presenter::TerminalPresenter;
pub use progress::ProgressBar;
