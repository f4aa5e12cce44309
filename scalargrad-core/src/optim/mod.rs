//! Optimizers for training neural networks.
//!
//! This module provides the `Optimizer` trait and the `SgdOptimizer`
//! implementation used by the training loop.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
