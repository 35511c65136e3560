//! CLI command definitions and handlers.

pub mod classify;
pub mod stream;

use clap::{Parser, Subcommand};
use eye_gaze_core::Threshold;

/// Eye Gaze - Classify gaze direction from face-tracking blend shapes
#[derive(Parser)]
#[command(name = "eye-gaze")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared classify arguments (paths, threshold, output flags).
    #[command(flatten)]
    pub classify: classify::ClassifyArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Classify every frame of recorded tracking sessions
    Classify(classify::ClassifyArgs),
    /// Classify a live recording and print label changes
    Stream(stream::StreamArgs),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every frame was classified.
    Success,
    /// At least one frame was skipped.
    FramesSkipped,
    /// The command failed.
    Error,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => Self::SUCCESS,
            ExitCode::FramesSkipped => Self::from(1),
            ExitCode::Error => Self::from(2),
        }
    }
}

impl ExitCode {
    /// Exit code for a run that skipped `skipped` frames.
    #[must_use]
    pub const fn for_skipped(skipped: usize) -> Self {
        if skipped > 0 {
            Self::FramesSkipped
        } else {
            Self::Success
        }
    }
}

/// Parse and validate a threshold value (any finite number).
fn parse_threshold(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    Threshold::new(value)
        .map(Threshold::get)
        .map_err(|e| e.to_string())
}

/// Builds a threshold, falling back to the hardcoded default.
fn threshold_or_default(value: Option<f32>) -> Threshold {
    value
        .and_then(|v| Threshold::new(v).ok())
        .unwrap_or(Threshold::DEFAULT)
}
