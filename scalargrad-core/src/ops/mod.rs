//! # Scalar Operations Module (`ops`)
//!
//! Every node of a [`Graph`](crate::value::Graph) carries an [`Op`] tag. The tag
//! selects the forward rule used when the node is created and the local-gradient
//! rule used by the backward pass. Both rules are dispatched from a single `match`
//! in this module; the formulas themselves live next to the operation that owns
//! them.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a fallible function (`add_op`,
//!   `pow_op`, ...) that checks its domain and appends the result node. Library
//!   code calls these with `?`.
//! - **Operator sugar:** `&a + &b`, `a.pow(2.0)`, `a.tanh()` and friends call the
//!   `_op` functions and panic on error.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`activation`]: tanh, relu.

pub mod activation;
pub mod arithmetic;

use std::fmt;

use activation::{relu, tanh};
use arithmetic::{add, mul, neg, pow};

/// Operation that produced a node.
///
/// Subtraction and division are not primitive: `a - b` is `a + (-b)` and
/// `a / b` is `a * b^-1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Leaf,
    Add,
    Mul,
    Pow { exponent: f64 },
    Neg,
    Tanh,
    Relu,
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add => "add",
            Op::Mul => "mul",
            Op::Pow { .. } => "pow",
            Op::Neg => "neg",
            Op::Tanh => "tanh",
            Op::Relu => "relu",
        }
    }

    /// Number of operands the operation consumes.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Pow { .. } | Op::Neg | Op::Tanh | Op::Relu => 1,
            Op::Add | Op::Mul => 2,
        }
    }

    /// Forward rule. Unused input slots are ignored.
    pub(crate) fn forward(self, inputs: [f64; 2]) -> f64 {
        let [a, b] = inputs;
        match self {
            Op::Leaf => a,
            Op::Add => add::forward(a, b),
            Op::Mul => mul::forward(a, b),
            Op::Pow { exponent } => pow::forward(a, exponent),
            Op::Neg => neg::forward(a),
            Op::Tanh => tanh::forward(a),
            Op::Relu => relu::forward(a),
        }
    }

    /// Local-gradient rule: `d(output) / d(operand_i)` for each operand slot.
    pub(crate) fn local_grads(self, inputs: [f64; 2], output: f64) -> [f64; 2] {
        let [a, b] = inputs;
        match self {
            Op::Leaf => [0.0, 0.0],
            Op::Add => add::local_grads(a, b),
            Op::Mul => mul::local_grads(a, b),
            Op::Pow { exponent } => [pow::local_grad(a, exponent), 0.0],
            Op::Neg => [neg::local_grad(a), 0.0],
            Op::Tanh => [tanh::local_grad(output), 0.0],
            Op::Relu => [relu::local_grad(a), 0.0],
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Pow { exponent } => write!(f, "pow({})", exponent),
            other => f.write_str(other.name()),
        }
    }
}
