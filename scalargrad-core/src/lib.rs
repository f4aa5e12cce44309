//! # scalargrad-core
//!
//! A scalar reverse-mode autograd engine with just enough neural network
//! machinery to train a small multi-layer perceptron.
//!
//! - [`value`]: the [`Graph`] arena and [`Value`] handles.
//! - [`ops`]: arithmetic and activation operations with their gradient rules.
//! - [`autograd`]: the backward pass and a finite-difference gradient checker.
//! - [`nn`] and [`model`]: parameters, neurons, layers, the [`Mlp`] and MSE loss.
//! - [`optim`]: the [`Optimizer`] trait and SGD.
//! - [`train`]: the [`Trainer`] state machine and progress reporting.

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod train;
pub mod utils;
pub mod value;
pub mod value_data;

pub use error::{ErrorKind, ScalarGradError};
pub use model::{Architecture, Mlp};
pub use optim::{Optimizer, SgdOptimizer};
pub use train::{Sample, TrainConfig, Trainer, TrainingReport};
pub use value::{Graph, Value};
pub use value_data::NodeId;
