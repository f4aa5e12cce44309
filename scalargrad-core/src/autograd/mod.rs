//! # Reverse-mode Automatic Differentiation
//!
//! [`backward`] computes the gradient of a root value with respect to every node
//! it depends on, in one reverse sweep over the arena. [`grad_check`] compares
//! those gradients against central finite differences.

pub mod backward;
pub mod grad_check;
pub(crate) mod graph;

pub use backward::backward;
pub use grad_check::{check_grad, GradCheckError};
