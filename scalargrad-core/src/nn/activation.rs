use crate::error::ScalarGradError;
use crate::ops::activation::{relu_op, tanh_op};
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Nonlinearity applied to the output of a neuron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    /// No nonlinearity; used on the output layer of a regression network.
    Identity,
}

impl Activation {
    pub fn apply(&self, x: &Value) -> Result<Value, ScalarGradError> {
        match self {
            Activation::Tanh => tanh_op(x),
            Activation::Relu => relu_op(x),
            Activation::Identity => Ok(x.clone()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::Identity => "identity",
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Activation {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu),
            "identity" | "linear" | "none" => Ok(Activation::Identity),
            _ => Err(ScalarGradError::InvalidConfiguration(format!(
                "Unsupported activation: {}",
                s
            ))),
        }
    }
}
