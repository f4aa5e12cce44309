//! # Activation Functions
//!
//! Non-linear functions applied to a single value. Hidden layers of the MLP use
//! them to learn non-linear targets such as `sin`.
//!
//! ## Currently Implemented:
//! - [`tanh`](tanh/fn.tanh_op.html): hyperbolic tangent, local gradient `1 - out^2`.
//! - [`ReLU`](relu/fn.relu_op.html): Rectified Linear Unit.

pub mod relu;
pub mod tanh;

pub use relu::relu_op;
pub use tanh::tanh_op;
