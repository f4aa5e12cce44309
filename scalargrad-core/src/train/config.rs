use crate::error::ScalarGradError;

/// Upper bound on the number of steps a single training run may request.
pub const MAX_TRAINING_STEPS: usize = 10_000_000;

/// Hyperparameters of a training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    /// Number of update steps. Zero is valid and leaves the model untouched.
    pub steps: usize,
    pub learning_rate: f64,
    /// Progress is reported every `report_every` steps, plus the first and last.
    pub report_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            steps: 10_000,
            learning_rate: 0.05,
            report_every: 1_000,
        }
    }
}

impl TrainConfig {
    pub fn new(steps: usize, learning_rate: f64) -> Self {
        TrainConfig {
            steps,
            learning_rate,
            ..TrainConfig::default()
        }
    }

    pub fn with_report_every(mut self, report_every: usize) -> Self {
        self.report_every = report_every;
        self
    }

    /// # Errors
    /// * `InvalidLearningRate` unless the learning rate is finite and positive.
    /// * `InvalidStepCount` above [`MAX_TRAINING_STEPS`].
    /// * `InvalidConfiguration` if `report_every` is zero.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        crate::optim::optimizer_trait::validate_learning_rate(self.learning_rate)?;
        if self.steps > MAX_TRAINING_STEPS {
            return Err(ScalarGradError::InvalidStepCount {
                steps: i64::try_from(self.steps).unwrap_or(i64::MAX),
                max: MAX_TRAINING_STEPS,
            });
        }
        if self.report_every == 0 {
            return Err(ScalarGradError::InvalidConfiguration(
                "report_every must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether progress is emitted after step `step` (zero-based).
    pub fn should_report(&self, step: usize) -> bool {
        step % self.report_every.max(1) == 0 || step + 1 == self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_is_valid() {
        let config = TrainConfig::default();
        assert!(config.validate().is_ok());
        assert!(TrainConfig::new(0, 0.1).validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let cases = [
            TrainConfig::new(10, 0.0),
            TrainConfig::new(10, -1.0),
            TrainConfig::new(10, f64::NAN),
            TrainConfig::new(MAX_TRAINING_STEPS + 1, 0.1),
            TrainConfig::new(10, 0.1).with_report_every(0),
        ];
        for config in cases {
            let err = config.validate().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration, "{:?}", config);
        }
        assert_eq!(
            TrainConfig::new(MAX_TRAINING_STEPS + 1, 0.1).validate(),
            Err(ScalarGradError::InvalidStepCount {
                steps: (MAX_TRAINING_STEPS + 1) as i64,
                max: MAX_TRAINING_STEPS
            })
        );
    }

    #[test]
    fn test_should_report() {
        let config = TrainConfig::new(25, 0.1).with_report_every(10);
        let reported: Vec<usize> = (0..25).filter(|&s| config.should_report(s)).collect();
        assert_eq!(reported, vec![0, 10, 20, 24]);
    }
}
