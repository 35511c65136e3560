//! Progress bar adapter using indicatif.

use eye_gaze_core::{ProgressEvent, ProgressSink};
use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

/// Progress bar adapter for CLI output.
pub struct ProgressBar {
    bar: Option<IndicatifBar>,
    quiet: bool,
}

impl ProgressBar {
    /// Creates a new progress bar.
    ///
    /// # Arguments
    ///
    /// * `total` - Total number of frames, if known
    /// * `quiet` - If true, suppress all output
    /// * `show_bar` - If true, show a bar (or spinner when the total is unknown)
    #[must_use]
    pub fn new(total: Option<u64>, quiet: bool, show_bar: bool) -> Self {
        if quiet {
            return Self {
                bar: None,
                quiet: true,
            };
        }

        let bar = if show_bar {
            let bar = total.map_or_else(IndicatifBar::new_spinner, IndicatifBar::new);

            let template = if total.is_some() {
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})"
            } else {
                "{spinner:.green} [{elapsed_precise}] {pos} frames {msg}"
            };
            if let Ok(style) = ProgressStyle::default_bar().template(template) {
                bar.set_style(style.progress_chars("#>-"));
            }

            Some(bar)
        } else {
            None
        };

        Self { bar, quiet }
    }
}

impl ProgressSink for ProgressBar {
    fn on_event(&self, event: ProgressEvent) {
        if self.quiet {
            return;
        }

        match event {
            ProgressEvent::Started {
                source,
                index,
                total,
                ..
            } => {
                if let Some(bar) = &self.bar {
                    if let Some(t) = total {
                        bar.set_length(t as u64);
                    }
                    bar.set_position(index as u64);
                    bar.set_message(source);
                }
            }
            ProgressEvent::Completed { .. } => {
                if let Some(bar) = &self.bar {
                    bar.inc(1);
                }
            }
            ProgressEvent::Skipped {
                source,
                frame,
                reason,
            } => {
                if let Some(bar) = &self.bar {
                    bar.inc(1);
                }
                match (source, frame) {
                    (Some(source), Some(frame)) => {
                        eprintln!("WARN: Skipping {source} frame {frame}: {reason}");
                    }
                    (Some(source), None) => eprintln!("WARN: Skipping {source}: {reason}"),
                    (None, _) => eprintln!("WARN: Skipping unreadable frame: {reason}"),
                }
            }
            ProgressEvent::Finished {
                classified,
                skipped,
            } => {
                if let Some(bar) = &self.bar {
                    bar.finish_with_message(format!(
                        "Done: {classified} classified, {skipped} skipped"
                    ));
                }
            }
        }
    }
}
