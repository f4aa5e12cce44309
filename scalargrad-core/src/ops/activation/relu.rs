use crate::error::ScalarGradError;
use crate::ops::Op;
use crate::value::Value;

/// Rectified linear unit: `max(0, a)`.
pub fn relu_op(a: &Value) -> Result<Value, ScalarGradError> {
    a.graph().apply(Op::Relu, &[a])
}

// NaN passes through so the graph reports it as non-finite.
pub(crate) fn forward(a: f64) -> f64 {
    if a <= 0.0 {
        0.0
    } else {
        a
    }
}

/// The gradient at exactly zero is taken as 0.
pub(crate) fn local_grad(a: f64) -> f64 {
    if a > 0.0 {
        1.0
    } else {
        0.0
    }
}

impl Value {
    /// Applies ReLU, panicking where [`relu_op`] would return an error.
    pub fn relu(&self) -> Value {
        relu_op(self).unwrap_or_else(|e| panic!("Value relu operation failed: {:?}", e))
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
