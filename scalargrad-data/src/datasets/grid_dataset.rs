use std::f64::consts::PI;

use crate::dataset::Dataset;
use crate::grid::linspace;
use scalargrad_core::{Sample, ScalarGradError};

/// A one-input, one-output dataset sampled on an evenly spaced grid.
///
/// Point `i` is `(x_i, f(x_i))` with `x_i` taken from
/// [`linspace(start, end, n)`](crate::grid::linspace).
#[derive(Debug, Clone, PartialEq)]
pub struct GridDataset {
    inputs: Vec<f64>,
    targets: Vec<f64>,
}

impl GridDataset {
    /// Samples `target` at `n` points from `start` to `end` inclusive.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if `n == 0`, a bound is not finite or
    ///   `start > end`.
    /// - `NonFinite` if `target` returns NaN or an infinity at a grid point.
    pub fn new<F>(n: usize, start: f64, end: f64, target: F) -> Result<Self, ScalarGradError>
    where
        F: Fn(f64) -> f64,
    {
        if n == 0 {
            return Err(ScalarGradError::InvalidConfiguration(
                "grid dataset needs at least one point".to_string(),
            ));
        }
        if start > end {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "grid start {} is greater than end {}",
                start, end
            )));
        }
        let inputs = linspace(start, end, n)?;
        let targets = inputs
            .iter()
            .map(|&x| {
                let y = target(x);
                if y.is_finite() {
                    Ok(y)
                } else {
                    Err(ScalarGradError::NonFinite {
                        operation: "grid target".to_string(),
                        value: y,
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Sampled {} grid points on [{}, {}]", n, start, end);
        Ok(GridDataset { inputs, targets })
    }

    /// `n` points of `sin(x)` on `[start, end]`.
    pub fn sine(n: usize, start: f64, end: f64) -> Result<Self, ScalarGradError> {
        Self::new(n, start, end, f64::sin)
    }

    /// `n` points of `sin(x)` on `[-π, π]`.
    pub fn sine_period(n: usize) -> Result<Self, ScalarGradError> {
        Self::sine(n, -PI, PI)
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// Iterates `(x, y)` pairs in grid order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.inputs.iter().copied().zip(self.targets.iter().copied())
    }
}

impl Dataset for GridDataset {
    type Item = Sample;

    fn get(&self, index: usize) -> Result<Sample, ScalarGradError> {
        match (self.inputs.get(index), self.targets.get(index)) {
            (Some(&x), Some(&y)) => Ok(Sample::scalar(x, y)),
            _ => Err(ScalarGradError::IndexOutOfBounds {
                index,
                len: self.inputs.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(test)]
#[path = "grid_dataset_test.rs"]
mod tests;
