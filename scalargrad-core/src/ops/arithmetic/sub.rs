use crate::error::ScalarGradError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Subtracts two values: `a - b`, built as `a + (-b)`.
///
/// # Errors
/// * `GraphMismatch` if `a` and `b` live in different graphs.
/// * `NonFinite` if the difference overflows.
pub fn sub_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    let neg_b = neg_op(b)?;
    add_op(a, &neg_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Op;
    use crate::value::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_sub_forward_backward() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let a = graph.leaf(1.0);
        let b = graph.leaf(4.0);
        let c = sub_op(&a, &b)?;
        assert_relative_eq!(c.data(), -3.0);
        assert_eq!(c.op(), Op::Add);
        c.backward();
        assert_relative_eq!(a.grad(), 1.0);
        assert_relative_eq!(b.grad(), -1.0);
        Ok(())
    }

    #[test]
    fn test_sub_self_is_zero_with_cancelling_grads() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let a = graph.leaf(7.0);
        let c = sub_op(&a, &a)?;
        c.backward();
        assert_eq!(c.data(), 0.0);
        assert_eq!(a.grad(), 0.0);
        Ok(())
    }
}
