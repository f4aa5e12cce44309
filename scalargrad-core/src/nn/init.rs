//! Parameter initialization schemes.
//!
//! Every scheme draws from a caller-supplied random source, so a seeded
//! `StdRng` gives the same network on every run.

use crate::error::ScalarGradError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// How the weights and biases of a new layer are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Initializer {
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    /// Every parameter set to the same value.
    Constant(f64),
}

impl Default for Initializer {
    fn default() -> Self {
        Initializer::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Initializer {
    /// Checks the scheme's bounds.
    ///
    /// # Errors
    /// `InvalidInitializer` for non-finite values, `low >= high`, or a negative
    /// standard deviation.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        match *self {
            Initializer::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() || !(high - low).is_finite() {
                    return Err(ScalarGradError::InvalidInitializer(format!(
                        "uniform bounds must be finite, got [{}, {})",
                        low, high
                    )));
                }
                if low >= high {
                    return Err(ScalarGradError::InvalidInitializer(format!(
                        "uniform requires low < high, got [{}, {})",
                        low, high
                    )));
                }
            }
            Initializer::Normal { mean, std } => {
                if !mean.is_finite() || !std.is_finite() || std < 0.0 {
                    return Err(ScalarGradError::InvalidInitializer(format!(
                        "normal requires a finite mean and a finite std >= 0, got mean={} std={}",
                        mean, std
                    )));
                }
            }
            Initializer::Constant(value) => {
                if !value.is_finite() {
                    return Err(ScalarGradError::InvalidInitializer(format!(
                        "constant must be finite, got {}",
                        value
                    )));
                }
            }
        }
        Ok(())
    }

    /// Validates the scheme and builds a reusable sampler.
    pub fn sampler(&self) -> Result<Sampler, ScalarGradError> {
        self.validate()?;
        let sampler = match *self {
            Initializer::Uniform { low, high } => Sampler::Uniform(Uniform::new(low, high)),
            Initializer::Normal { mean, std } => Sampler::Normal(
                Normal::new(mean, std)
                    .map_err(|e| ScalarGradError::InvalidInitializer(e.to_string()))?,
            ),
            Initializer::Constant(value) => Sampler::Constant(value),
        };
        Ok(sampler)
    }
}

/// A validated [`Initializer`], ready to draw values.
#[derive(Debug, Clone, Copy)]
pub enum Sampler {
    Uniform(Uniform<f64>),
    Normal(Normal<f64>),
    Constant(f64),
}

impl Sampler {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Sampler::Uniform(dist) => dist.sample(rng),
            Sampler::Normal(dist) => dist.sample(rng),
            Sampler::Constant(value) => *value,
        }
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
