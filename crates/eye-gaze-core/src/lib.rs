//! Eye Gaze Core - Domain logic for gaze-direction classification
//!
//! This crate contains the blend-shape domain types, the stateless gaze
//! classifier, the ports that connect it to tracking and presentation
//! collaborators, and the label hand-off used to reach a presentation task.

pub mod classifier;
pub mod domain;
pub mod ports;
pub mod presentation;

pub use classifier::{classify, GazeClassifier};
pub use domain::{
    BlendShapeKey, BlendShapeSnapshot, ClassificationRecord, DirectionalScores, FaceFrame,
    GazeConfig, GazeDirection, GazeError, Threshold,
};
pub use ports::{Presenter, ProgressEvent, ProgressSink, ResultOutput, SnapshotSource};
pub use presentation::{label_channel, spawn_presenter, LabelHandoff, LabelUpdate, PresenterHandle};
