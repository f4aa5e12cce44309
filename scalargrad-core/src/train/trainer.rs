use crate::error::ScalarGradError;
use crate::model::Mlp;
use crate::nn::{Module, MseLoss};
use crate::optim::{Optimizer, SgdOptimizer};
use crate::train::{ProgressEvent, ProgressReporter, Sample, TrainConfig};
use crate::value::{Checkpoint, Value};
use std::fmt;

/// Phase of the training state machine.
///
/// `Idle -> ForwardPass -> BackwardPass -> Updated`, repeated once per step,
/// then `Done` when a [`Trainer::fit`] run completes. A failed step returns to
/// `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainState {
    Idle,
    ForwardPass,
    BackwardPass,
    Updated,
    Done,
}

impl fmt::Display for TrainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrainState::Idle => "idle",
            TrainState::ForwardPass => "forward pass",
            TrainState::BackwardPass => "backward pass",
            TrainState::Updated => "updated",
            TrainState::Done => "done",
        };
        f.write_str(name)
    }
}

/// Outcome of [`Trainer::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    /// Loss of the untrained model.
    pub initial_loss: f64,
    /// Loss after the last update; equals `initial_loss` when no step ran.
    pub final_loss: f64,
    pub steps_completed: usize,
    /// Every event sent to the progress reporter.
    pub history: Vec<ProgressEvent>,
}

/// Drives full-batch training of an [`Mlp`] against a fixed set of samples.
///
/// The trainer records a checkpoint of the model graph when it is created and
/// rewinds to it after every step and evaluation. Nodes added to the graph
/// after that point are discarded by the next step or evaluation, including
/// the parameters of any other [`Mlp`] built on the same [`Graph`](crate::value::Graph);
/// their handles go stale and panic on access. Build every model a graph will
/// hold before creating a trainer on it, or give each model its own graph.
#[derive(Debug)]
pub struct Trainer<O: Optimizer = SgdOptimizer> {
    model: Mlp,
    optimizer: O,
    loss: MseLoss,
    config: TrainConfig,
    checkpoint: Checkpoint,
    state: TrainState,
    steps_completed: usize,
}

impl Trainer<SgdOptimizer> {
    /// Plain SGD over every model parameter with mean squared error.
    pub fn sgd(model: Mlp, config: TrainConfig) -> Result<Self, ScalarGradError> {
        config.validate()?;
        let optimizer = SgdOptimizer::new(model.parameters(), config.learning_rate)?;
        Trainer::new(model, optimizer, MseLoss::default(), config)
    }
}

impl<O: Optimizer> Trainer<O> {
    /// Creates a trainer. The optimizer's learning rate is set from `config`.
    ///
    /// # Errors
    /// Any configuration error from [`TrainConfig::validate`].
    pub fn new(
        model: Mlp,
        mut optimizer: O,
        loss: MseLoss,
        config: TrainConfig,
    ) -> Result<Self, ScalarGradError> {
        config.validate()?;
        optimizer.set_learning_rate(config.learning_rate)?;
        let checkpoint = model.graph().checkpoint();
        Ok(Trainer {
            model,
            optimizer,
            loss,
            config,
            checkpoint,
            state: TrainState::Idle,
            steps_completed: 0,
        })
    }

    pub fn model(&self) -> &Mlp {
        &self.model
    }

    pub fn into_model(self) -> Mlp {
        self.model
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    pub fn state(&self) -> TrainState {
        self.state
    }

    /// Steps completed over the trainer's lifetime.
    pub fn steps_completed(&self) -> usize {
        self.steps_completed
    }

    /// Forward-only loss of the current parameters on `samples`.
    pub fn evaluate(&self, samples: &[Sample]) -> Result<f64, ScalarGradError> {
        let result = self.build_loss(samples).and_then(|loss| finite_loss(&loss));
        self.model.graph().rewind(self.checkpoint);
        result
    }

    /// Runs one forward/backward/update step and returns the loss computed
    /// before the update.
    ///
    /// On failure no parameter is changed, the step's graph is discarded and the
    /// state returns to `Idle`.
    pub fn step(&mut self, samples: &[Sample]) -> Result<f64, ScalarGradError> {
        let result = self.run_step(samples);
        self.model.graph().rewind(self.checkpoint);
        match result {
            Ok(loss) => {
                self.state = TrainState::Updated;
                self.steps_completed += 1;
                Ok(loss)
            }
            Err(e) => {
                log::warn!("Training step {} aborted: {}", self.steps_completed, e);
                self.state = TrainState::Idle;
                Err(e)
            }
        }
    }

    /// Trains for `config.steps` steps, reporting progress at step 0, every
    /// `config.report_every` steps and at the last step.
    pub fn fit(
        &mut self,
        samples: &[Sample],
        reporter: &mut dyn ProgressReporter,
    ) -> Result<TrainingReport, ScalarGradError> {
        let total = self.config.steps;
        log::info!(
            "Training {} on {} samples for {} steps (lr = {})",
            self.model,
            samples.len(),
            total,
            self.optimizer.learning_rate()
        );

        let initial_loss = self.evaluate(samples)?;
        let mut history = Vec::new();
        for step in 0..total {
            let loss = self.step(samples)?;
            if self.config.should_report(step) {
                let event = ProgressEvent { step, loss };
                reporter.report(&event);
                history.push(event);
            }
        }
        let final_loss = if total == 0 {
            initial_loss
        } else {
            self.evaluate(samples)?
        };

        self.state = TrainState::Done;
        log::info!(
            "Training done: loss {:.6} -> {:.6} after {} steps",
            initial_loss,
            final_loss,
            total
        );
        Ok(TrainingReport {
            initial_loss,
            final_loss,
            steps_completed: total,
            history,
        })
    }

    fn run_step(&mut self, samples: &[Sample]) -> Result<f64, ScalarGradError> {
        self.state = TrainState::ForwardPass;
        let loss = self.build_loss(samples)?;
        let loss_value = finite_loss(&loss)?;

        self.state = TrainState::BackwardPass;
        self.optimizer.zero_grad();
        loss.backward();
        self.optimizer.step()?;
        Ok(loss_value)
    }

    /// Mean squared error of the model over every output of every sample.
    fn build_loss(&self, samples: &[Sample]) -> Result<Value, ScalarGradError> {
        let graph = self.model.graph();
        let mut predictions = Vec::with_capacity(samples.len());
        let mut targets = Vec::with_capacity(samples.len());
        for sample in samples {
            let xs: Vec<Value> = sample.input.iter().map(|&x| graph.constant(x)).collect();
            let outputs = self.model.forward(&xs)?;
            if outputs.len() != sample.target.len() {
                return Err(ScalarGradError::InputWidthMismatch {
                    expected: outputs.len(),
                    actual: sample.target.len(),
                });
            }
            predictions.extend(outputs);
            targets.extend(sample.target.iter().map(|&y| graph.constant(y)));
        }
        self.loss.forward(&predictions, &targets)
    }
}

fn finite_loss(loss: &Value) -> Result<f64, ScalarGradError> {
    let value = loss.data();
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScalarGradError::NonFinite {
            operation: "loss".to_string(),
            value,
        })
    }
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
