use crate::error::ScalarGradError;
use crate::ops::Op;
use crate::value::Value;

/// Raises a value to a constant power: `base ^ exponent`.
///
/// # Arguments
/// * `base` - The value to raise.
/// * `exponent` - A constant; it is not part of the graph and receives no gradient.
///
/// # Errors
/// * `DivisionByZero` if `base` is zero and `exponent` is negative.
/// * `InvalidPower` if `base` is negative and `exponent` is not an integer.
/// * `NonFinite` if the result overflows or `exponent` is not finite.
pub fn pow_op(base: &Value, exponent: f64) -> Result<Value, ScalarGradError> {
    let x = base.data();
    if x == 0.0 && exponent < 0.0 {
        return Err(ScalarGradError::DivisionByZero {
            operation: "pow".to_string(),
        });
    }
    if x < 0.0 && exponent.fract() != 0.0 {
        return Err(ScalarGradError::InvalidPower { base: x, exponent });
    }
    base.graph().apply(Op::Pow { exponent }, &[base])
}

pub(crate) fn forward(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

pub(crate) fn local_grad(base: f64, exponent: f64) -> f64 {
    // x^0 is constant; avoids 0 * inf at x = 0.
    if exponent == 0.0 {
        return 0.0;
    }
    exponent * base.powf(exponent - 1.0)
}

impl Value {
    /// Raises the value to a constant power.
    ///
    /// Panics where [`pow_op`] would return an error.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
            .unwrap_or_else(|e| panic!("Value power operation failed: {:?}", e))
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
