//! Boundary entry point of scalargrad.
//!
//! [`train`] builds a grid of `(x, sin x)` samples, a 1-16-16-1 tanh MLP with a
//! fixed seed, trains it with plain SGD and returns a [`TrainingSummary`]. The
//! call is self-contained: it needs no state from the host and leaves none
//! behind. With the `wasm` feature the same run is exported to JavaScript.

pub mod config;
pub mod summary;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{SineConfig, DEFAULT_STEPS};
pub use summary::{Prediction, TrainingSummary, PROBE_POINTS};

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::train::{LogReporter, ProgressReporter};
use scalargrad_core::{Graph, Mlp, ScalarGradError, Trainer};
use scalargrad_data::Dataset;

/// Trains the default sine model for `steps` steps, logging progress.
///
/// `train(0)` performs no update and reports the initial loss as the final
/// loss.
///
/// # Errors
/// * `InvalidStepCount` above [`MAX_TRAINING_STEPS`](scalargrad_core::train::MAX_TRAINING_STEPS).
/// * A numeric error if a forward pass or an update produces a non-finite value.
pub fn train(steps: usize) -> Result<TrainingSummary, ScalarGradError> {
    let config = SineConfig::default().with_steps(steps);
    train_with_config(&config, &mut LogReporter)
}

/// [`train`] with [`DEFAULT_STEPS`] steps.
pub fn train_default() -> Result<TrainingSummary, ScalarGradError> {
    train(DEFAULT_STEPS)
}

/// Runs the training described by `config`, sending progress to `reporter`.
pub fn train_with_config(
    config: &SineConfig,
    reporter: &mut dyn ProgressReporter,
) -> Result<TrainingSummary, ScalarGradError> {
    config.validate()?;
    log::debug!("Sine run: {:?}", config);
    let samples = config.dataset()?.to_vec()?;

    let graph = Graph::with_capacity(config.architecture().num_parameters());
    let mut rng = StdRng::seed_from_u64(config.seed);
    let model = Mlp::new(&graph, &config.architecture(), &mut rng)?;
    let mut trainer = Trainer::sgd(model, config.train_config())?;

    let report = trainer.fit(&samples, reporter)?;
    TrainingSummary::from_report(&report, trainer.model())
}
