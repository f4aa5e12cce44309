use crate::error::ScalarGradError;
use crate::ops::arithmetic::{add_op, mul_op, pow_op, sub_op};
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the output:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::InvalidConfiguration(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Computes the Mean Squared Error (MSE) loss between predictions and targets.
///
/// Every element contributes `(prediction - target)^2`; the squared errors are
/// then summed or averaged over all elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node.
    ///
    /// # Errors
    /// * `InputWidthMismatch` if the slices differ in length.
    /// * `InvalidConfiguration` if they are empty.
    /// * Any numeric error raised while building the graph.
    pub fn forward(&self, predictions: &[Value], targets: &[Value]) -> Result<Value, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::InputWidthMismatch {
                expected: targets.len(),
                actual: predictions.len(),
            });
        }
        let (first_pred, first_target) = match (predictions.first(), targets.first()) {
            (Some(p), Some(t)) => (p, t),
            _ => {
                return Err(ScalarGradError::InvalidConfiguration(
                    "MSE loss needs at least one element".to_string(),
                ))
            }
        };

        let mut total = squared_error(first_pred, first_target)?;
        for (p, t) in predictions.iter().zip(targets).skip(1) {
            let err = squared_error(p, t)?;
            total = add_op(&total, &err)?;
        }

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => {
                let scale = total.graph().constant(1.0 / predictions.len() as f64);
                mul_op(&total, &scale)
            }
        }
    }
}

fn squared_error(prediction: &Value, target: &Value) -> Result<Value, ScalarGradError> {
    let diff = sub_op(prediction, target)?;
    pow_op(&diff, 2.0)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
