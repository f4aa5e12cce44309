//! Configuration of the sine training run.
//!
//! [`SineConfig::default`] is the fixed run the boundary function performs.
//! [`SineConfig::from_env`] overrides any field from `SCALARGRAD_*` environment
//! variables; unset variables keep their default.

use scalargrad_core::{Architecture, ScalarGradError, TrainConfig};
use scalargrad_data::GridDataset;
use std::f64::consts::PI;
use std::str::FromStr;

pub const ENV_PREFIX: &str = "SCALARGRAD_";
pub const ENV_SEED: &str = "SEED";
pub const ENV_SAMPLES: &str = "SAMPLES";
pub const ENV_X_MIN: &str = "X_MIN";
pub const ENV_X_MAX: &str = "X_MAX";
pub const ENV_HIDDEN: &str = "HIDDEN";
pub const ENV_LEARNING_RATE: &str = "LEARNING_RATE";
pub const ENV_STEPS: &str = "STEPS";
pub const ENV_REPORT_EVERY: &str = "REPORT_EVERY";

pub const DEFAULT_STEPS: usize = 10_000;

/// Everything that determines a sine training run.
///
/// Two runs with equal configs produce bit-identical results.
#[derive(Debug, Clone, PartialEq)]
pub struct SineConfig {
    /// Seed of the parameter initializer.
    pub seed: u64,
    /// Number of grid points in `[x_min, x_max]`, both ends included.
    pub samples: usize,
    pub x_min: f64,
    pub x_max: f64,
    /// Widths of the tanh hidden layers. The network has one input and one
    /// linear output.
    pub hidden: Vec<usize>,
    pub learning_rate: f64,
    pub steps: usize,
    pub report_every: usize,
}

impl Default for SineConfig {
    fn default() -> Self {
        SineConfig {
            seed: 42,
            samples: 100,
            x_min: -PI,
            x_max: PI,
            hidden: vec![16, 16],
            learning_rate: 0.05,
            steps: DEFAULT_STEPS,
            report_every: 1_000,
        }
    }
}

/// Returns the full environment variable key for a given suffix (`SEED` -> `SCALARGRAD_SEED`).
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Parses a set variable into `T`, mapping failures to `ConfigParse`.
fn parsed<T>(key: &str, raw: Option<String>) -> Result<Option<T>, ScalarGradError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(None),
        Some(value) => match value.trim().parse() {
            Ok(t) => Ok(Some(t)),
            Err(e) => Err(ScalarGradError::ConfigParse {
                key: key.to_string(),
                value,
                message: e.to_string(),
            }),
        },
    }
}

/// Parses a comma-separated list of layer widths such as `16,16`.
fn parse_widths(key: &str, value: &str) -> Result<Vec<usize>, ScalarGradError> {
    if value.trim().is_empty() {
        return Ok(Vec::new());
    }
    value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| ScalarGradError::ConfigParse {
                    key: key.to_string(),
                    value: value.to_string(),
                    message: e.to_string(),
                })
        })
        .collect()
}

impl SineConfig {
    /// Defaults overridden by `SCALARGRAD_*` environment variables.
    ///
    /// # Errors
    /// `ConfigParse` for a set variable that does not parse. The result is not
    /// validated.
    pub fn from_env() -> Result<Self, ScalarGradError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ScalarGradError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = SineConfig::default();
        let read = |suffix: &str| {
            let key = env_key(suffix);
            let raw = lookup(&key);
            (key, raw)
        };

        let (key, raw) = read(ENV_SEED);
        let seed = parsed::<u64>(&key, raw)?.unwrap_or(default.seed);
        let (key, raw) = read(ENV_SAMPLES);
        let samples = parsed::<usize>(&key, raw)?.unwrap_or(default.samples);
        let (key, raw) = read(ENV_X_MIN);
        let x_min = parsed::<f64>(&key, raw)?.unwrap_or(default.x_min);
        let (key, raw) = read(ENV_X_MAX);
        let x_max = parsed::<f64>(&key, raw)?.unwrap_or(default.x_max);
        let (key, raw) = read(ENV_HIDDEN);
        let hidden = match raw {
            Some(value) => parse_widths(&key, &value)?,
            None => default.hidden.clone(),
        };
        let (key, raw) = read(ENV_LEARNING_RATE);
        let learning_rate = parsed::<f64>(&key, raw)?.unwrap_or(default.learning_rate);
        let (key, raw) = read(ENV_STEPS);
        let steps = parsed::<usize>(&key, raw)?.unwrap_or(default.steps);
        let (key, raw) = read(ENV_REPORT_EVERY);
        let report_every = parsed::<usize>(&key, raw)?.unwrap_or(default.report_every);

        Ok(SineConfig {
            seed,
            samples,
            x_min,
            x_max,
            hidden,
            learning_rate,
            steps,
            report_every,
        })
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// `1 -> hidden... -> 1` with tanh hidden layers and a linear output.
    pub fn architecture(&self) -> Architecture {
        let mut sizes = self.hidden.clone();
        sizes.push(1);
        Architecture::new(1, sizes)
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.steps, self.learning_rate).with_report_every(self.report_every)
    }

    /// The `(x, sin x)` grid the model is trained on.
    pub fn dataset(&self) -> Result<GridDataset, ScalarGradError> {
        GridDataset::sine(self.samples, self.x_min, self.x_max)
    }

    /// Checks every field before any allocation happens.
    ///
    /// # Errors
    /// * `InvalidConfiguration` for an empty or inverted sample grid.
    /// * Construction errors from [`Architecture::validate`].
    /// * Configuration errors from [`TrainConfig::validate`].
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.samples == 0 {
            return Err(ScalarGradError::InvalidConfiguration(
                "at least one sample is required".to_string(),
            ));
        }
        if !self.x_min.is_finite() || !self.x_max.is_finite() || self.x_min > self.x_max {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "invalid sample range [{}, {}]",
                self.x_min, self.x_max
            )));
        }
        self.architecture().validate()?;
        self.train_config().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SineConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.samples, 100);
        assert_eq!(config.hidden, vec![16, 16]);
        assert_eq!(config.steps, 10_000);
        assert_eq!(config.report_every, 1_000);
        assert_eq!(config.architecture().layer_sizes, vec![16, 16, 1]);
        assert_eq!(config.architecture().num_parameters(), 321);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_key() {
        assert_eq!(env_key(ENV_SEED), "SCALARGRAD_SEED");
    }

    #[test]
    fn test_lookup_overrides() {
        let config = SineConfig::from_lookup(lookup(&[
            ("SCALARGRAD_SEED", "7"),
            ("SCALARGRAD_HIDDEN", "8, 4"),
            ("SCALARGRAD_LEARNING_RATE", "0.1"),
            ("SCALARGRAD_STEPS", " 500 "),
        ]))
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.hidden, vec![8, 4]);
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.steps, 500);
        assert_eq!(config.samples, 100);
        assert_eq!(config.report_every, 1_000);
    }

    #[test]
    fn test_unset_lookup_is_default() {
        let config = SineConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SineConfig::default());
    }

    #[test]
    fn test_unparsable_values() {
        let err = SineConfig::from_lookup(lookup(&[("SCALARGRAD_STEPS", "many")])).unwrap_err();
        match err {
            ScalarGradError::ConfigParse { key, value, .. } => {
                assert_eq!(key, "SCALARGRAD_STEPS");
                assert_eq!(value, "many");
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert!(matches!(
            SineConfig::from_lookup(lookup(&[("SCALARGRAD_HIDDEN", "16,x")])),
            Err(ScalarGradError::ConfigParse { .. })
        ));
        assert!(matches!(
            SineConfig::from_lookup(lookup(&[("SCALARGRAD_STEPS", "-5")])),
            Err(ScalarGradError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let base = SineConfig::default();
        let cases = [
            SineConfig { samples: 0, ..base.clone() },
            SineConfig { x_min: 1.0, x_max: -1.0, ..base.clone() },
            SineConfig { x_max: f64::NAN, ..base.clone() },
            SineConfig { learning_rate: 0.0, ..base.clone() },
            SineConfig { report_every: 0, ..base.clone() },
        ];
        for config in cases {
            assert!(config.validate().is_err(), "{:?}", config);
        }
        assert_eq!(
            SineConfig { hidden: vec![16, 0], ..base }.validate(),
            Err(ScalarGradError::ZeroWidthLayer { layer: 1 })
        );
    }
}
