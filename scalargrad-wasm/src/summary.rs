use scalargrad_core::{Mlp, ScalarGradError, TrainingReport};
use std::fmt;

/// Inputs at which a trained model is compared against `sin`.
pub const PROBE_POINTS: [f64; 7] = [0.0, -0.1, 0.1, 0.5, 1.0, 3.14, -1.57];

/// Model output next to the true value at one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub input: f64,
    pub predicted: f64,
    pub target: f64,
}

impl Prediction {
    pub fn error(&self) -> f64 {
        (self.predicted - self.target).abs()
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sin({}) = {:.6}; mlp({}) = {:.6}; error = {:.6}",
            self.input,
            self.target,
            self.input,
            self.predicted,
            self.error()
        )
    }
}

/// Diagnostic returned by the boundary function.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSummary {
    pub initial_loss: f64,
    pub final_loss: f64,
    /// Steps executed.
    pub steps: usize,
    /// One entry per [`PROBE_POINTS`] input, in order.
    pub predictions: Vec<Prediction>,
}

impl TrainingSummary {
    /// Combines a finished training run with probes of the trained `model`.
    pub fn from_report(report: &TrainingReport, model: &Mlp) -> Result<Self, ScalarGradError> {
        Ok(TrainingSummary {
            initial_loss: report.initial_loss,
            final_loss: report.final_loss,
            steps: report.steps_completed,
            predictions: probe(model, &PROBE_POINTS)?,
        })
    }

    /// The prediction at `input`, if it was probed.
    pub fn prediction_at(&self, input: f64) -> Option<&Prediction> {
        self.predictions.iter().find(|p| p.input == input)
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Trained for {} steps: loss {:.6} -> {:.6}",
            self.steps, self.initial_loss, self.final_loss
        )?;
        for prediction in &self.predictions {
            writeln!(f, "  {}", prediction)?;
        }
        Ok(())
    }
}

/// Evaluates a one-input, one-output `model` at each of `inputs`.
pub fn probe(model: &Mlp, inputs: &[f64]) -> Result<Vec<Prediction>, ScalarGradError> {
    inputs
        .iter()
        .map(|&input| {
            let outputs = model.predict(&[input])?;
            let predicted = outputs.first().copied().ok_or(ScalarGradError::IndexOutOfBounds {
                index: 0,
                len: outputs.len(),
            })?;
            Ok(Prediction {
                input,
                predicted,
                target: input.sin(),
            })
        })
        .collect()
}
