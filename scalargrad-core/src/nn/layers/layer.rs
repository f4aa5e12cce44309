use crate::error::ScalarGradError;
use crate::nn::{Activation, Initializer, Module, Neuron, Parameter};
use crate::value::{Graph, Value};
use rand::Rng;
use std::fmt;

/// A fully connected layer: `outputs` neurons sharing the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer mapping `inputs` values to `outputs` values.
    ///
    /// Parameters are drawn neuron by neuron.
    ///
    /// # Errors
    /// `InvalidArchitecture` if either width is zero.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        inputs: usize,
        outputs: usize,
        activation: Activation,
        init: &Initializer,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if outputs == 0 {
            return Err(ScalarGradError::InvalidArchitecture(
                "a layer needs at least one output".to_string(),
            ));
        }
        let neurons = (0..outputs)
            .map(|_| Neuron::new(graph, inputs, activation, init, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn num_inputs(&self) -> usize {
        self.neurons[0].num_inputs()
    }

    pub fn num_outputs(&self) -> usize {
        self.neurons.len()
    }

    pub fn activation(&self) -> Activation {
        self.neurons[0].activation()
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if inputs.len() != self.num_inputs() {
            return Err(ScalarGradError::InputWidthMismatch {
                expected: self.num_inputs(),
                actual: inputs.len(),
            });
        }
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (param_name, param) in neuron.named_parameters() {
                params.push((format!("neuron{}.{}", i, param_name), param));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.neurons.iter().map(|n| n as &dyn Module).collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Layer({} -> {}, {})",
            self.num_inputs(),
            self.num_outputs(),
            self.activation()
        )
    }
}
