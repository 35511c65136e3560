//! Discrete gaze directions and their display labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of classifying one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GazeDirection {
    /// Both eyes raised.
    Up,
    /// Both eyes lowered.
    Down,
    /// Eyes turned toward the viewer's left (the outer-turn score).
    Left,
    /// Eyes turned toward the viewer's right (the inner-turn score).
    Right,
    /// No directional score exceeded the threshold.
    #[default]
    None,
}

impl GazeDirection {
    /// Short lowercase name for logs and machine output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::None => "none",
        }
    }

    /// Text shown to the wearer.
    ///
    /// Horizontal labels are mirrored: the face's camera image is a mirror
    /// of what the wearer sees, so `Right` reads "Looking LEFT" and `Left`
    /// reads "Looking RIGHT". `None` yields an empty string, which clears
    /// the display.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Up => "Looking UP",
            Self::Down => "Looking DOWN",
            Self::Right => "Looking LEFT",
            Self::Left => "Looking RIGHT",
            Self::None => "",
        }
    }

    /// Whether a direction was registered.
    #[must_use]
    pub const fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for GazeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
