//! JSON Lines recording format for tracking sessions.
//!
//! One object per tracking update:
//!
//! ```json
//! {"frame": 12, "blendShapes": {"eyeLookUpRight": 0.02, "eyeLookUpLeft": 0.03}}
//! ```
//!
//! `frame` is optional and defaults to the line's position among non-blank
//! lines. Blend shapes other than the eight eye keys are ignored. Missing eye
//! keys are kept missing so the classifier can reject the frame.

use std::collections::HashMap;
use std::io::BufRead;

use anyhow::{Context, Result};
use eye_gaze_core::{BlendShapeSnapshot, FaceFrame};
use serde::Deserialize;
use tracing::trace;

/// A single recorded tracking update, as stored on disk.
#[derive(Debug, Deserialize)]
struct RecordedFrame {
    #[serde(default)]
    frame: Option<u64>,
    #[serde(rename = "blendShapes")]
    blend_shapes: HashMap<String, f32>,
}

/// Parses one recording line.
///
/// `index` is used as the frame number when the line has none.
///
/// # Errors
///
/// Returns an error if the line is not a valid recorded frame.
pub fn parse_line(line: &str, source: &str, index: u64) -> Result<FaceFrame> {
    let recorded: RecordedFrame = serde_json::from_str(line)
        .with_context(|| format!("{source}: invalid frame on line {}", index + 1))?;

    let snapshot = BlendShapeSnapshot::from_named(recorded.blend_shapes);
    trace!("{source}: parsed {} eye coefficients", snapshot.len());

    Ok(FaceFrame::new(
        source,
        recorded.frame.unwrap_or(index),
        snapshot,
    ))
}

/// Iterator over frames in a recording.
///
/// Each item is either a frame or the error for that single line; reading
/// continues past bad lines. An I/O error ends the recording after it is
/// yielded.
pub struct RecordingReader<R> {
    lines: std::io::Lines<R>,
    source: String,
    index: u64,
    done: bool,
}

impl<R: BufRead> RecordingReader<R> {
    /// Creates a reader over `reader`, labelling frames with `source`.
    pub fn new(reader: R, source: impl Into<String>) -> Self {
        Self {
            lines: reader.lines(),
            source: source.into(),
            index: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for RecordingReader<R> {
    type Item = Result<FaceFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.done = true;
                    return Some(
                        Err(e).with_context(|| format!("{}: failed to read line", self.source)),
                    )
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            let index = self.index;
            self.index += 1;
            return Some(parse_line(&line, &self.source, index));
        }
    }
}
