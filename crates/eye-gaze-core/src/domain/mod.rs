//! Core domain types for gaze classification.

mod blend_shape;
mod direction;
mod error;
mod frame;
mod result;
mod threshold;

pub use blend_shape::{BlendShapeKey, BlendShapeSnapshot, UnknownBlendShape};
pub use direction::GazeDirection;
pub use error::GazeError;
pub use frame::FaceFrame;
pub use result::{ClassificationRecord, DirectionalScores};
pub use threshold::{GazeConfig, Threshold};
