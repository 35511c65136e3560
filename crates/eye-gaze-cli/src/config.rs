//! Layered TOML configuration.
//!
//! Layers are read in order and overlaid field by field, later ones winning:
//! `$XDG_CONFIG_HOME/eye-gaze/config.toml`, then `.eye-gaze.toml` in the
//! working directory or its nearest ancestor. Commands apply CLI flags on top.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use eye_gaze_core::Threshold;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::output::OutputFormat;

/// File name of the project-local layer.
const PROJECT_FILE: &str = ".eye-gaze.toml";

/// Settings merged from every config layer.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub classifier: ClassifierConfig,
    pub output: OutputConfig,
    pub stream: StreamConfig,
}

/// `[general]`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Descend into subdirectories of directory arguments.
    pub recursive: Option<bool>,
}

/// `[classifier]`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// A directional score must exceed this to register.
    pub threshold: Option<f32>,
}

/// `[output]`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `json` or `jsonl`.
    pub format: Option<String>,
    pub pretty: Option<bool>,
    pub progress: Option<bool>,
}

/// `[stream]`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Present every frame's label, repeats included.
    pub every_frame: Option<bool>,
}

impl AppConfig {
    /// Reads the XDG and project layers for the current directory.
    ///
    /// Absent or unreadable layers are skipped. Values that fail validation
    /// are reported on stderr and dropped so the built-in default applies.
    pub fn load() -> Self {
        let project = std::env::current_dir()
            .ok()
            .and_then(|cwd| find_project_file(&cwd));
        let layers = xdg_config_path().into_iter().chain(project);

        let mut config = Self::from_layers(layers);
        for problem in config.sanitize() {
            eprintln!("warning: {problem}");
        }
        config
    }

    /// Overlays each readable layer onto the defaults, in order.
    fn from_layers(layers: impl IntoIterator<Item = PathBuf>) -> Self {
        layers
            .into_iter()
            .filter_map(|path| read_layer(&path))
            .fold(Self::default(), |mut config, layer| {
                config.overlay(layer);
                config
            })
    }

    /// Replaces every field that `upper` sets.
    fn overlay(&mut self, upper: Self) {
        set_if_some(&mut self.general.recursive, upper.general.recursive);
        set_if_some(&mut self.classifier.threshold, upper.classifier.threshold);
        set_if_some(&mut self.output.format, upper.output.format);
        set_if_some(&mut self.output.pretty, upper.output.pretty);
        set_if_some(&mut self.output.progress, upper.output.progress);
        set_if_some(&mut self.stream.every_frame, upper.stream.every_frame);
    }

    /// Drops invalid values, returning a description of each one.
    fn sanitize(&mut self) -> Vec<String> {
        let mut problems = Vec::new();

        if let Some(Err(e)) = self.classifier.threshold.map(Threshold::new) {
            warn!("Ignoring classifier.threshold: {e}");
            problems.push(format!("classifier.threshold: {e}"));
            self.classifier.threshold = None;
        }

        if let Some(format) = &self.output.format {
            if OutputFormat::from_str(format, false).is_err() {
                warn!("Ignoring output.format '{format}'");
                problems.push(format!(
                    "output.format must be 'json' or 'jsonl', got '{format}'"
                ));
                self.output.format = None;
            }
        }

        problems
    }

    /// The configured output format, if one is set and valid.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output
            .format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f, false).ok())
    }
}

fn set_if_some<T>(lower: &mut Option<T>, upper: Option<T>) {
    if upper.is_some() {
        *lower = upper;
    }
}

/// `eye-gaze/config.toml` under the platform config directory.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("eye-gaze").join("config.toml"))
}

/// Nearest `.eye-gaze.toml` in `start` or any of its ancestors.
fn find_project_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(PROJECT_FILE))
        .find(|candidate| candidate.is_file())
}

fn read_layer(path: &Path) -> Option<AppConfig> {
    if !path.is_file() {
        debug!("No config layer at {}", path.display());
        return None;
    }

    let text = std::fs::read_to_string(path)
        .map_err(|e| warn!("Cannot read config {}: {e}", path.display()))
        .ok()?;
    let layer = toml::from_str(&text)
        .map_err(|e| warn!("Ignoring malformed config {}: {e}", path.display()))
        .ok()?;

    info!("Loaded config layer {}", path.display());
    Some(layer)
}
