use crate::error::ScalarGradError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Divides two values: `a / b`, built as `a * b^-1`.
///
/// # Errors
/// * `DivisionByZero` if `b` is zero.
/// * `GraphMismatch` if `a` and `b` live in different graphs.
/// * `NonFinite` if the quotient overflows.
pub fn div_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    if b.data() == 0.0 {
        return Err(ScalarGradError::DivisionByZero {
            operation: "div".to_string(),
        });
    }
    let recip = pow_op(b, -1.0)?;
    mul_op(a, &recip)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
