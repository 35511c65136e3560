//! Synthetic snapshot builders for testing.

use eye_gaze_core::{BlendShapeKey, BlendShapeSnapshot, FaceFrame, GazeDirection};

/// Builder for creating synthetic blend-shape snapshots.
///
/// Provides convenience methods for snapshots that classify to a known
/// direction, sit exactly on a threshold, or are missing coefficients.
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    snapshot: BlendShapeSnapshot,
}

impl SnapshotBuilder {
    // === Uniform Snapshots ===

    /// Creates a snapshot with every eye coefficient set to `value`.
    #[must_use]
    pub fn uniform(value: f32) -> Self {
        Self {
            snapshot: BlendShapeKey::ALL.into_iter().map(|k| (k, value)).collect(),
        }
    }

    /// Creates a resting gaze: every coefficient zero.
    #[must_use]
    pub fn centered() -> Self {
        Self::uniform(0.0)
    }

    /// Creates a snapshot with no coefficients at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    // === Directional Presets ===

    /// Creates a snapshot that classifies to `direction` at the default threshold.
    ///
    /// Both coefficients behind the direction's score are set to 0.6 and all
    /// others to zero. `GazeDirection::None` yields a centered snapshot.
    #[must_use]
    pub fn looking(direction: GazeDirection) -> Self {
        Self::centered().score(direction, 0.6)
    }

    /// Sets both coefficients behind `direction`'s score to `value`, so the
    /// score equals `value`.
    #[must_use]
    pub fn score(self, direction: GazeDirection, value: f32) -> Self {
        match pair_for(direction) {
            Some((a, b)) => self.with(a, value).with(b, value),
            None => self,
        }
    }

    // === Per-Key Overrides ===

    /// Sets one coefficient.
    #[must_use]
    pub fn with(mut self, key: BlendShapeKey, value: f32) -> Self {
        self.snapshot = self.snapshot.with(key, value);
        self
    }

    /// Removes one coefficient.
    #[must_use]
    pub fn without(mut self, key: BlendShapeKey) -> Self {
        self.snapshot = self.snapshot.without(key);
        self
    }

    // === Output ===

    /// Returns the built snapshot.
    #[must_use]
    pub fn build(self) -> BlendShapeSnapshot {
        self.snapshot
    }

    /// Wraps the snapshot in a frame.
    #[must_use]
    pub fn frame(self, source: &str, frame: u64) -> FaceFrame {
        FaceFrame::new(source, frame, self.snapshot)
    }

    /// Renders the snapshot as one recording line.
    ///
    /// Adds a non-eye blend shape, as real trackers report, to make sure
    /// readers ignore it.
    #[must_use]
    pub fn to_json_line(&self, frame: Option<u64>) -> String {
        let mut shapes = serde_json::Map::new();
        for (key, value) in self.snapshot.iter() {
            shapes.insert(key.as_str().to_string(), serde_json::Value::from(value));
        }
        shapes.insert("jawOpen".to_string(), serde_json::Value::from(0.0));

        let mut line = serde_json::Map::new();
        if let Some(frame) = frame {
            line.insert("frame".to_string(), serde_json::Value::from(frame));
        }
        line.insert("blendShapes".to_string(), serde_json::Value::Object(shapes));

        serde_json::Value::Object(line).to_string()
    }
}

/// Renders snapshots as a recording with sequential frame numbers.
#[must_use]
pub fn recording(snapshots: &[SnapshotBuilder]) -> String {
    let mut out = String::new();
    for (frame, builder) in (0u64..).zip(snapshots) {
        out.push_str(&builder.to_json_line(Some(frame)));
        out.push('\n');
    }
    out
}

/// The coefficient pair averaged into `direction`'s score.
const fn pair_for(direction: GazeDirection) -> Option<(BlendShapeKey, BlendShapeKey)> {
    match direction {
        GazeDirection::Up => Some((BlendShapeKey::EyeLookUpRight, BlendShapeKey::EyeLookUpLeft)),
        GazeDirection::Down => Some((
            BlendShapeKey::EyeLookDownRight,
            BlendShapeKey::EyeLookDownLeft,
        )),
        GazeDirection::Right => Some((BlendShapeKey::EyeLookInRight, BlendShapeKey::EyeLookOutLeft)),
        GazeDirection::Left => Some((BlendShapeKey::EyeLookOutRight, BlendShapeKey::EyeLookInLeft)),
        GazeDirection::None => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use eye_gaze_core::GazeClassifier;

    use super::*;

    #[test]
    fn test_presets_classify_as_named() {
        let classifier = GazeClassifier::default();
        for direction in [
            GazeDirection::Up,
            GazeDirection::Down,
            GazeDirection::Left,
            GazeDirection::Right,
            GazeDirection::None,
        ] {
            let snapshot = SnapshotBuilder::looking(direction).build();
            assert_eq!(classifier.classify(&snapshot), Ok(direction));
        }
    }

    #[test]
    fn test_without_removes_key() {
        let snapshot = SnapshotBuilder::centered()
            .without(BlendShapeKey::EyeLookOutLeft)
            .build();
        assert_eq!(snapshot.missing_keys(), vec![BlendShapeKey::EyeLookOutLeft]);
    }

    #[test]
    fn test_json_line_shape() {
        let line = SnapshotBuilder::empty()
            .with(BlendShapeKey::EyeLookUpLeft, 0.5)
            .to_json_line(Some(3));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["frame"], 3);
        assert_eq!(value["blendShapes"]["eyeLookUpLeft"], 0.5);
        assert_eq!(value["blendShapes"]["jawOpen"], 0.0);
    }

    #[test]
    fn test_recording_numbers_frames() {
        let text = recording(&[SnapshotBuilder::centered(), SnapshotBuilder::centered()]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("\"frame\":1"));
    }
}
