//! Filesystem adapter for loading recorded tracking sessions.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eye_gaze_core::{FaceFrame, SnapshotSource};
use tracing::{debug, warn};

use crate::recording::RecordingReader;

/// Supported recording extensions.
const RECORDING_EXTENSIONS: &[&str] = &["jsonl", "ndjson"];

/// Filesystem snapshot source adapter.
///
/// Yields the frames of every recording found under the configured paths,
/// file by file, in sorted path order.
pub struct FsSnapshotSource {
    paths: Vec<PathBuf>,
    recursive: bool,
}

impl FsSnapshotSource {
    /// Creates a new filesystem snapshot source.
    ///
    /// # Arguments
    ///
    /// * `paths` - Recordings or directories to scan
    /// * `recursive` - Whether to recurse into subdirectories
    #[must_use]
    pub const fn new(paths: Vec<PathBuf>, recursive: bool) -> Self {
        Self { paths, recursive }
    }

    /// Collects all recording files from the configured paths.
    #[must_use]
    pub fn recordings(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in &self.paths {
            if path.is_file() {
                if is_recording(path) {
                    files.push(path.clone());
                } else {
                    warn!("Unsupported file type: {}", path.display());
                }
            } else if path.is_dir() {
                let mut found = Vec::new();
                self.collect_from_dir(path, &mut found);
                found.sort();
                files.append(&mut found);
            } else {
                warn!("Path does not exist: {}", path.display());
            }
        }

        files
    }

    fn collect_from_dir(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match std::fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                warn!("Failed to read directory {}: {e}", dir.display());
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && is_recording(&path) {
                files.push(path);
            } else if path.is_dir() && self.recursive {
                self.collect_from_dir(&path, files);
            }
        }
    }
}

impl SnapshotSource for FsSnapshotSource {
    fn frames(&self) -> Box<dyn Iterator<Item = Result<FaceFrame>> + Send + '_> {
        let files = self.recordings();
        debug!("Found {} recordings", files.len());

        Box::new(files.into_iter().flat_map(|path| open_recording(&path)))
    }

    fn count_hint(&self) -> Option<usize> {
        // Counting frames means reading every file; leave the total open.
        None
    }
}

/// Opens a recording, yielding its frames or a single open error.
fn open_recording(path: &Path) -> Box<dyn Iterator<Item = Result<FaceFrame>> + Send> {
    let source = path.to_string_lossy().into_owned();
    match File::open(path).with_context(|| format!("Failed to open recording: {source}")) {
        Ok(file) => Box::new(RecordingReader::new(BufReader::new(file), source)),
        Err(e) => Box::new(std::iter::once(Err(e))),
    }
}

/// Checks if a path has a supported recording extension.
fn is_recording(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .is_some_and(|e| RECORDING_EXTENSIONS.contains(&e.as_str()))
}
