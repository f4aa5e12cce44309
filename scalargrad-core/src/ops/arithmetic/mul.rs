use crate::error::ScalarGradError;
use crate::ops::Op;
use crate::value::Value;

/// Multiplies two values: `a * b`.
///
/// # Errors
/// * `GraphMismatch` if `a` and `b` live in different graphs.
/// * `NonFinite` if the product overflows.
pub fn mul_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    a.graph().apply(Op::Mul, &[a, b])
}

pub(crate) fn forward(a: f64, b: f64) -> f64 {
    a * b
}

pub(crate) fn local_grads(a: f64, b: f64) -> [f64; 2] {
    [b, a]
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
