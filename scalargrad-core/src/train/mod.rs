//! # Training Loop
//!
//! A [`Trainer`] repeats forward pass, backward pass and optimizer update for a
//! fixed number of steps. Each step builds its graph on top of the model's
//! parameters and discards it afterwards, so memory stays bounded however long
//! training runs.

pub mod config;
pub mod progress;
pub mod sample;
pub mod trainer;

pub use config::{TrainConfig, MAX_TRAINING_STEPS};
pub use progress::{LogReporter, NullReporter, ProgressEvent, ProgressReporter};
pub use sample::Sample;
pub use trainer::{TrainState, Trainer, TrainingReport};
