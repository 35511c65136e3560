//! Stream command - classify a live recording and present label changes.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use eye_gaze_adapters::RecordingReader;
use eye_gaze_core::{
    spawn_presenter, FaceFrame, GazeClassifier, GazeConfig, GazeDirection, LabelHandoff,
};
use tracing::{debug, info, warn};

use super::{parse_threshold, threshold_or_default, ExitCode};
use crate::config::AppConfig;
use crate::output::TerminalPresenter;

/// Arguments for the stream command.
#[derive(Args, Clone, Default)]
pub struct StreamArgs {
    /// Read the recording from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Minimum directional score that registers a direction
    #[arg(long, value_parser = parse_threshold, allow_negative_numbers = true)]
    pub threshold: Option<f32>,

    /// Present a label for every frame, not only when it changes
    #[arg(long)]
    pub every_frame: bool,
}

impl StreamArgs {
    /// Apply configuration file values, respecting CLI precedence.
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        args.threshold = args.threshold.or(config.classifier.threshold);
        if !args.every_frame {
            args.every_frame = config.stream.every_frame.unwrap_or(false);
        }
        args
    }
}

/// Run the stream command.
pub fn run(args: &StreamArgs) -> Result<ExitCode> {
    let (reader, source): (Box<dyn BufRead>, String) = match &args.input {
        Some(path) => {
            anyhow::ensure!(
                path.is_file(),
                "Failed to open recording: {} is not a file",
                path.display()
            );
            let file = File::open(path)
                .with_context(|| format!("Failed to open recording: {}", path.display()))?;
            (
                Box::new(BufReader::new(file)) as Box<dyn BufRead>,
                path.to_string_lossy().into_owned(),
            )
        }
        None => (
            Box::new(io::stdin().lock()) as Box<dyn BufRead>,
            "stdin".to_string(),
        ),
    };
    info!("Streaming frames from {source}");

    let classifier = GazeClassifier::new(GazeConfig::new(threshold_or_default(args.threshold)));
    let (handoff, presenter) = spawn_presenter(TerminalPresenter::stdout())?;

    let mut gate = LabelGate::new(args.every_frame);
    let mut skipped = 0usize;
    for item in RecordingReader::new(reader, source) {
        if !handle_frame(item, &classifier, &mut gate, &handoff) {
            skipped += 1;
        }
    }

    // Closing the hand-off lets the presentation task drain and exit
    drop(handoff);
    let presented = presenter.join()?;
    info!(
        "Stream ended: {} frames, {presented} labels presented, {skipped} skipped",
        gate.frames
    );

    Ok(ExitCode::for_skipped(skipped))
}

/// Classifies one streamed frame and hands its label off if needed.
///
/// Returns `false` when the frame was skipped. A skipped frame leaves the
/// presented label untouched.
fn handle_frame(
    item: Result<FaceFrame>,
    classifier: &GazeClassifier,
    gate: &mut LabelGate,
    handoff: &LabelHandoff,
) -> bool {
    let frame = match item {
        Ok(frame) => frame,
        Err(e) => {
            warn!("Skipping unreadable frame: {e:#}");
            return false;
        }
    };

    match classifier.classify(&frame.snapshot) {
        Ok(direction) => {
            gate.frames += 1;
            if gate.admit(direction) {
                debug!("{} frame {}: {direction}", frame.source, frame.frame);
                handoff.dispatch(direction);
            }
            true
        }
        Err(e) => {
            warn!("Skipping {} frame {}: {e}", frame.source, frame.frame);
            false
        }
    }
}

/// Decides which classified directions reach the presenter.
#[derive(Debug)]
struct LabelGate {
    every_frame: bool,
    last: Option<GazeDirection>,
    frames: usize,
}

impl LabelGate {
    const fn new(every_frame: bool) -> Self {
        Self {
            every_frame,
            last: None,
            frames: 0,
        }
    }

    /// Whether `direction` should be presented.
    fn admit(&mut self, direction: GazeDirection) -> bool {
        let changed = self.last != Some(direction);
        self.last = Some(direction);
        self.every_frame || changed
    }
}
