use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::optim::optimizer_trait::{validate_learning_rate, Optimizer};

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// With the defaults (no momentum, no weight decay) a step is
/// `data -= lr * grad` for every parameter. Otherwise:
///
/// ```text
/// d_p = grad + weight_decay * data
/// buf = momentum * buf + d_p        (if momentum != 0)
/// data -= lr * buf
/// ```
#[derive(Debug, Clone)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    momentum_buffers: Vec<f64>,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameters to optimize, usually `model.parameters()`.
    /// * `lr`: The learning rate.
    ///
    /// # Errors
    /// `InvalidLearningRate` unless `lr` is finite and positive.
    pub fn new<'a>(
        params: impl IntoIterator<Item = &'a Parameter>,
        lr: f64,
    ) -> Result<Self, ScalarGradError> {
        validate_learning_rate(lr)?;
        let params: Vec<Parameter> = params.into_iter().cloned().collect();
        let momentum_buffers = vec![0.0; params.len()];
        Ok(SgdOptimizer {
            params,
            lr,
            momentum: 0.0,
            weight_decay: 0.0,
            momentum_buffers,
        })
    }

    /// Momentum factor in `[0, 1)`.
    pub fn with_momentum(mut self, momentum: f64) -> Result<Self, ScalarGradError> {
        if !(0.0..1.0).contains(&momentum) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "momentum must be in [0, 1), got {}",
                momentum
            )));
        }
        self.momentum = momentum;
        Ok(self)
    }

    /// Weight decay (L2 penalty) factor, `>= 0`.
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Result<Self, ScalarGradError> {
        if !(weight_decay.is_finite() && weight_decay >= 0.0) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "weight decay must be finite and >= 0, got {}",
                weight_decay
            )));
        }
        self.weight_decay = weight_decay;
        Ok(self)
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        let mut updates = Vec::with_capacity(self.params.len());
        let mut buffers = self.momentum_buffers.clone();

        for (i, param) in self.params.iter().enumerate() {
            let grad = param.grad();
            if !grad.is_finite() {
                log::warn!(
                    "SGD step rejected: parameter {} has non-finite gradient {}",
                    i,
                    grad
                );
                return Err(ScalarGradError::NonFinite {
                    operation: "sgd gradient".to_string(),
                    value: grad,
                });
            }

            let data = param.data();
            let mut d_p = grad;
            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * data;
            }
            if self.momentum != 0.0 {
                buffers[i] = self.momentum * buffers[i] + d_p;
                d_p = buffers[i];
            }

            let updated = data - self.lr * d_p;
            if !updated.is_finite() {
                log::warn!("SGD step rejected: parameter {} would become {}", i, updated);
                return Err(ScalarGradError::NonFinite {
                    operation: "sgd update".to_string(),
                    value: updated,
                });
            }
            updates.push(updated);
        }

        for (param, updated) in self.params.iter().zip(updates) {
            param.set_data(updated)?;
        }
        self.momentum_buffers = buffers;
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), ScalarGradError> {
        validate_learning_rate(lr)?;
        self.lr = lr;
        Ok(())
    }

    fn parameters(&self) -> &[Parameter] {
        &self.params
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
