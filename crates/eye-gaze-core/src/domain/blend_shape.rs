//! Blend-shape keys and per-frame coefficient snapshots.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::GazeError;

/// One of the eye-movement blend shapes the classifier reads.
///
/// Serialized with the upstream tracker's camelCase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlendShapeKey {
    /// Right eye raised.
    EyeLookUpRight,
    /// Left eye raised.
    EyeLookUpLeft,
    /// Right eye lowered.
    EyeLookDownRight,
    /// Left eye lowered.
    EyeLookDownLeft,
    /// Right eye turned toward the nose.
    EyeLookInRight,
    /// Left eye turned away from the nose.
    EyeLookOutLeft,
    /// Right eye turned away from the nose.
    EyeLookOutRight,
    /// Left eye turned toward the nose.
    EyeLookInLeft,
}

impl BlendShapeKey {
    /// Every key a well-formed snapshot must carry.
    pub const ALL: [Self; 8] = [
        Self::EyeLookUpRight,
        Self::EyeLookUpLeft,
        Self::EyeLookDownRight,
        Self::EyeLookDownLeft,
        Self::EyeLookInRight,
        Self::EyeLookOutLeft,
        Self::EyeLookOutRight,
        Self::EyeLookInLeft,
    ];

    /// Upstream name of this blend shape.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EyeLookUpRight => "eyeLookUpRight",
            Self::EyeLookUpLeft => "eyeLookUpLeft",
            Self::EyeLookDownRight => "eyeLookDownRight",
            Self::EyeLookDownLeft => "eyeLookDownLeft",
            Self::EyeLookInRight => "eyeLookInRight",
            Self::EyeLookOutLeft => "eyeLookOutLeft",
            Self::EyeLookOutRight => "eyeLookOutRight",
            Self::EyeLookInLeft => "eyeLookInLeft",
        }
    }
}

impl fmt::Display for BlendShapeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a name is not one of the eye blend shapes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown blend shape: {0}")]
pub struct UnknownBlendShape(pub String);

impl FromStr for BlendShapeKey {
    type Err = UnknownBlendShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownBlendShape(s.to_string()))
    }
}

/// One frame's eye blend-shape coefficients.
///
/// Values are stored as delivered; nothing is clamped. A snapshot can be
/// missing keys, in which case classifying it fails instead of reading zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BlendShapeSnapshot {
    coefficients: BTreeMap<BlendShapeKey, f32>,
}

impl BlendShapeSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            coefficients: BTreeMap::new(),
        }
    }

    /// Builds a snapshot from upstream `(name, value)` pairs.
    ///
    /// Names outside the eight eye keys are ignored, since trackers report
    /// many more blend shapes than the classifier reads.
    pub fn from_named<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f32)>,
        S: AsRef<str>,
    {
        let coefficients = pairs
            .into_iter()
            .filter_map(|(name, value)| {
                name.as_ref()
                    .parse::<BlendShapeKey>()
                    .ok()
                    .map(|key| (key, value))
            })
            .collect();
        Self { coefficients }
    }

    /// Returns a copy of this snapshot with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: BlendShapeKey, value: f32) -> Self {
        self.coefficients.insert(key, value);
        self
    }

    /// Returns a copy of this snapshot with `key` removed.
    #[must_use]
    pub fn without(mut self, key: BlendShapeKey) -> Self {
        self.coefficients.remove(&key);
        self
    }

    /// Returns the coefficient for `key`, if present.
    #[must_use]
    pub fn get(&self, key: BlendShapeKey) -> Option<f32> {
        self.coefficients.get(&key).copied()
    }

    /// Returns the coefficient for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`GazeError::MissingCoefficient`] if the key is absent.
    pub fn require(&self, key: BlendShapeKey) -> Result<f32, GazeError> {
        self.get(key).ok_or(GazeError::MissingCoefficient(key))
    }

    /// Checks that every eye key is present.
    ///
    /// # Errors
    ///
    /// Returns [`GazeError::MissingCoefficient`] naming the first absent key.
    pub fn validate(&self) -> Result<(), GazeError> {
        match self.missing_keys().first() {
            Some(&key) => Err(GazeError::MissingCoefficient(key)),
            None => Ok(()),
        }
    }

    /// Lists absent keys in [`BlendShapeKey::ALL`] order.
    #[must_use]
    pub fn missing_keys(&self) -> Vec<BlendShapeKey> {
        BlendShapeKey::ALL
            .into_iter()
            .filter(|key| !self.coefficients.contains_key(key))
            .collect()
    }

    /// Number of eye keys present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether no eye keys are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Iterates present coefficients in key order.
    pub fn iter(&self) -> impl Iterator<Item = (BlendShapeKey, f32)> + '_ {
        self.coefficients.iter().map(|(&key, &value)| (key, value))
    }
}

impl FromIterator<(BlendShapeKey, f32)> for BlendShapeSnapshot {
    fn from_iter<T: IntoIterator<Item = (BlendShapeKey, f32)>>(iter: T) -> Self {
        Self {
            coefficients: iter.into_iter().collect(),
        }
    }
}
