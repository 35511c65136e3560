//! Classify command - classify every frame of recorded sessions.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use eye_gaze_adapters::FsSnapshotSource;
use eye_gaze_core::{
    ClassificationRecord, GazeClassifier, GazeConfig, ProgressEvent, ProgressSink, ResultOutput,
    SnapshotSource,
};
use tracing::{debug, info};

use super::{parse_threshold, threshold_or_default, ExitCode};
use crate::config::AppConfig;
use crate::output::{JsonOutput, OutputFormat, ProgressBar};

/// Shared arguments for classifying recordings.
#[derive(Args, Clone, Default)]
pub struct ClassifyArgs {
    /// Recordings (.jsonl, .ndjson) or directories to classify
    pub paths: Vec<PathBuf>,

    /// Descend into subdirectories of directory arguments
    #[arg(short, long)]
    pub recursive: bool,

    /// Minimum directional score that registers a direction
    #[arg(long, value_parser = parse_threshold, allow_negative_numbers = true)]
    pub threshold: Option<f32>,

    /// Force the progress bar even when stderr is not a terminal
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress and skip warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Record format on stdout
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Indent the JSON array (--format json only)
    #[arg(long)]
    pub pretty: bool,
}

impl ClassifyArgs {
    /// Fills flags left unset on the command line from `config`.
    ///
    /// Anything still unset after this falls back to the built-in defaults
    /// in the accessors below.
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        if !args.recursive {
            args.recursive = config.general.recursive.unwrap_or(false);
        }

        args.threshold = args.threshold.or(config.classifier.threshold);

        args.format = args.format.or_else(|| config.output_format());

        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }

        args
    }

    /// Classifier settings, using the default threshold when none is set.
    fn gaze_config(&self) -> GazeConfig {
        GazeConfig::new(threshold_or_default(self.threshold))
    }

    /// Output format, JSONL unless set.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

/// Counts from a classification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Frames classified.
    pub classified: usize,
    /// Frames skipped (unreadable or malformed).
    pub skipped: usize,
}

/// Run the classify command.
///
/// `args` should already carry config values via [`ClassifyArgs::with_config`].
pub fn run(args: &ClassifyArgs) -> Result<ExitCode> {
    info!("Running classify command on {} paths", args.paths.len());

    if args.paths.is_empty() {
        anyhow::bail!("No paths specified");
    }

    let source = FsSnapshotSource::new(args.paths.clone(), args.recursive);
    let total = source.count_hint();

    let show_progress = !args.quiet && (args.progress || std::io::stderr().is_terminal());
    let progress = ProgressBar::new(total.map(|t| t as u64), args.quiet, show_progress);

    let output = JsonOutput::stdout(args.format(), args.pretty);

    let config = args.gaze_config();
    debug!("Classifier threshold: {}", config.threshold.get());
    let classifier = GazeClassifier::new(config);

    let tally = process_frames(&source, &classifier, &output, &progress)?;
    info!(
        "Classified {} frames, skipped {}",
        tally.classified, tally.skipped
    );

    Ok(ExitCode::for_skipped(tally.skipped))
}

/// Classify every frame of `source`, writing one record per frame.
///
/// Unreadable and malformed frames are reported as skipped and never end the
/// run. Only output failures are returned as errors.
pub fn process_frames(
    source: &dyn SnapshotSource,
    classifier: &GazeClassifier,
    output: &dyn ResultOutput,
    progress: &dyn ProgressSink,
) -> Result<Tally> {
    let total = source.count_hint();
    let mut classified = 0usize;
    let mut skipped = 0usize;

    for (index, item) in source.frames().enumerate() {
        let frame = match item {
            Ok(frame) => frame,
            Err(e) => {
                // The error carries the recording path and line via context
                debug!("Skipping unreadable frame: {e:#}");
                progress.on_event(ProgressEvent::Skipped {
                    source: None,
                    frame: None,
                    reason: format!("{e:#}"),
                });
                skipped += 1;
                continue;
            }
        };

        progress.on_event(ProgressEvent::Started {
            source: frame.source.clone(),
            frame: frame.frame,
            index,
            total,
        });

        match classifier.classify_with_scores(&frame.snapshot) {
            Ok((direction, scores)) => {
                debug!("{} frame {}: {direction}", frame.source, frame.frame);

                let record = ClassificationRecord::new(
                    frame.source,
                    frame.frame,
                    iso_timestamp(),
                    direction,
                    scores,
                );
                output.write(&record)?;
                progress.on_event(ProgressEvent::Completed { record });
                classified += 1;
            }
            Err(e) => {
                debug!("Skipping {} frame {}: {e}", frame.source, frame.frame);
                progress.on_event(ProgressEvent::Skipped {
                    source: Some(frame.source),
                    frame: Some(frame.frame),
                    reason: e.to_string(),
                });
                skipped += 1;
            }
        }
    }

    output.flush()?;

    progress.on_event(ProgressEvent::Finished {
        classified,
        skipped,
    });

    Ok(Tally {
        classified,
        skipped,
    })
}

/// Current UTC time as RFC 3339.
fn iso_timestamp() -> String {
    match time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339) {
        Ok(ts) => ts,
        Err(e) => {
            debug!("Timestamp format failed: {e}");
            String::from("1970-01-01T00:00:00Z")
        }
    }
}
