use crate::error::ScalarGradError;
use crate::ops::Op;
use crate::value::Value;

/// Applies the hyperbolic tangent: `tanh(a)`.
///
/// Output is bounded in `(-1, 1)`, so the only failure is a non-finite input.
pub fn tanh_op(a: &Value) -> Result<Value, ScalarGradError> {
    a.graph().apply(Op::Tanh, &[a])
}

pub(crate) fn forward(a: f64) -> f64 {
    a.tanh()
}

/// Expressed through the output: `1 - tanh(a)^2`.
pub(crate) fn local_grad(output: f64) -> f64 {
    1.0 - output * output
}

impl Value {
    /// Applies `tanh`, panicking where [`tanh_op`] would return an error.
    pub fn tanh(&self) -> Value {
        tanh_op(self).unwrap_or_else(|e| panic!("Value tanh operation failed: {:?}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_tanh_forward_backward() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let a = graph.leaf(0.5);
        let b = tanh_op(&a)?;
        assert_relative_eq!(b.data(), 0.5f64.tanh());
        b.backward();
        assert_relative_eq!(a.grad(), 1.0 - 0.5f64.tanh().powi(2), epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_tanh_saturates() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let a = graph.leaf(50.0);
        let b = tanh_op(&a)?;
        b.backward();
        assert_relative_eq!(b.data(), 1.0);
        assert_relative_eq!(a.grad(), 0.0);
        Ok(())
    }
}
