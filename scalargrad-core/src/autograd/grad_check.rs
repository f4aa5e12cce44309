use crate::error::ScalarGradError;
use crate::value::{Graph, Value};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Function evaluation failed during gradient check: {0}")]
    ForwardPassError(#[from] ScalarGradError),
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` receives one fresh leaf per entry of `inputs` and must return a scalar
/// built from them. The analytical gradient of each leaf is compared with
/// `(f(x + epsilon) - f(x - epsilon)) / (2 * epsilon)`.
///
/// # Arguments
/// * `func` - The function under test.
/// * `inputs` - The point at which gradients are checked.
/// * `epsilon` - Finite-difference step.
/// * `tolerance` - Maximum accepted absolute difference.
///
/// # Errors
/// `GradientMismatch` for the first input whose gradients disagree, or the error
/// returned by `func`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Value> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&leaves)?;
    output.backward();

    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let loss_plus = evaluate(&func, inputs, input_index, epsilon)?;
        let loss_minus = evaluate(&func, inputs, input_index, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

/// Forward-only evaluation with input `index` shifted by `delta`.
fn evaluate<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, ScalarGradError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Value> = inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| graph.leaf(if i == index { x + delta } else { x }))
        .collect();
    Ok(func(&leaves)?.data())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
