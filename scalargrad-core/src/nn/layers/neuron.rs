use crate::error::ScalarGradError;
use crate::nn::{Activation, Initializer, Module, Parameter};
use crate::ops::arithmetic::{add_op, mul_op};
use crate::value::{Graph, Value};
use rand::Rng;
use std::fmt;

/// One output unit: `activation(b + sum_i w_i * x_i)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `inputs` weights and one bias, drawn from `init`.
    ///
    /// Weights are drawn first, in input order, then the bias.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `inputs` is zero, `InvalidInitializer` if `init` is
    /// invalid.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        inputs: usize,
        activation: Activation,
        init: &Initializer,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if inputs == 0 {
            return Err(ScalarGradError::InvalidArchitecture(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let sampler = init.sampler()?;
        let weights = (0..inputs)
            .map(|i| {
                let w = graph.leaf(sampler.sample(&mut *rng));
                Parameter::new(w, Some(format!("w{}", i)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let bias = Parameter::new(graph.leaf(sampler.sample(rng)), Some("b".to_string()))?;
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    /// Evaluates the neuron on one input vector.
    ///
    /// # Errors
    /// `InputWidthMismatch` if `inputs.len()` differs from the number of weights.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::InputWidthMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let mut sum = self.bias.value().clone();
        for (w, x) in self.weights.iter().zip(inputs) {
            let wx = mul_op(w, x)?;
            sum = add_op(&sum, &wx)?;
        }
        self.activation.apply(&sum)
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn num_inputs(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.parameters()
            .into_iter()
            .map(|p| (p.name().unwrap_or("param").to_string(), p))
            .collect()
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Neuron({}, {})", self.weights.len(), self.activation)
    }
}
