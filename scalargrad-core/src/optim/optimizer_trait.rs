use crate::error::ScalarGradError;
use crate::nn::Parameter;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Either every parameter is updated or none is: a non-finite gradient or a
    /// non-finite updated value fails the step before any parameter is written.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `ScalarGradError` otherwise.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    fn zero_grad(&mut self);

    fn learning_rate(&self) -> f64;

    /// # Errors
    /// `InvalidLearningRate` unless `lr` is finite and positive.
    fn set_learning_rate(&mut self, lr: f64) -> Result<(), ScalarGradError>;

    /// The parameters updated by [`Optimizer::step`], in update order.
    fn parameters(&self) -> &[Parameter];
}

/// Shared learning-rate check.
pub(crate) fn validate_learning_rate(lr: f64) -> Result<(), ScalarGradError> {
    if lr.is_finite() && lr > 0.0 {
        Ok(())
    } else {
        Err(ScalarGradError::InvalidLearningRate(lr))
    }
}
