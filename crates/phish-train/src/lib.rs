//! Training stage of the phishing pipeline.
//!
//! The orchestrator only depends on the [`ModelTrainer`] seam; the
//! built-in [`BaselineTrainer`] fits a small candidate set of simple
//! classifiers, scores them on the held-out test partition, and persists
//! the winner together with the path of the preprocessing object it was
//! trained behind.

#![deny(unsafe_code)]

mod error;
mod model;
mod trainer;

pub use error::TrainError;
pub use model::{BaselineModel, TrainedModel, accuracy};
pub use trainer::{BaselineTrainer, ModelTrainer, TrainerConfig};
