use crate::error::ScalarGradError;
use crate::nn::{Activation, Initializer, Layer, Module, Parameter};
use crate::value::{Graph, Value};
use rand::Rng;
use std::fmt;

/// Shape and initialization of a multi-layer perceptron.
#[derive(Debug, Clone, PartialEq)]
pub struct Architecture {
    /// Width of the input vector.
    pub inputs: usize,
    /// Output width of each layer, first to last.
    pub layer_sizes: Vec<usize>,
    pub hidden_activation: Activation,
    pub output_activation: Activation,
    pub init: Initializer,
}

impl Architecture {
    /// Tanh hidden layers, identity output layer, uniform `[-1, 1)` initialization.
    pub fn new(inputs: usize, layer_sizes: Vec<usize>) -> Self {
        Architecture {
            inputs,
            layer_sizes,
            hidden_activation: Activation::Tanh,
            output_activation: Activation::Identity,
            init: Initializer::default(),
        }
    }

    pub fn with_hidden_activation(mut self, activation: Activation) -> Self {
        self.hidden_activation = activation;
        self
    }

    pub fn with_output_activation(mut self, activation: Activation) -> Self {
        self.output_activation = activation;
        self
    }

    pub fn with_init(mut self, init: Initializer) -> Self {
        self.init = init;
        self
    }

    /// # Errors
    /// * `InvalidArchitecture` for zero inputs or no layers.
    /// * `ZeroWidthLayer` for a layer of width zero.
    /// * `InvalidInitializer` for a bad initialization scheme.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.inputs == 0 {
            return Err(ScalarGradError::InvalidArchitecture(
                "the network needs at least one input".to_string(),
            ));
        }
        if self.layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidArchitecture(
                "the network needs at least one layer".to_string(),
            ));
        }
        if let Some(layer) = self.layer_sizes.iter().position(|&size| size == 0) {
            return Err(ScalarGradError::ZeroWidthLayer { layer });
        }
        self.init.validate()
    }

    /// Width of the output vector, or 0 if there are no layers.
    pub fn outputs(&self) -> usize {
        self.layer_sizes.last().copied().unwrap_or(0)
    }

    /// Total number of weights and biases.
    pub fn num_parameters(&self) -> usize {
        let mut fan_in = self.inputs;
        let mut total = 0;
        for &size in &self.layer_sizes {
            total += (fan_in + 1) * size;
            fan_in = size;
        }
        total
    }
}

/// A stack of fully connected layers; the output of layer `i` feeds layer `i + 1`.
#[derive(Debug, Clone)]
pub struct Mlp {
    graph: Graph,
    layers: Vec<Layer>,
}

impl Mlp {
    /// Allocates every parameter of `architecture` in `graph`, layer by layer.
    ///
    /// The architecture is validated before anything is allocated.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        architecture: &Architecture,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        architecture.validate()?;
        let last = architecture.layer_sizes.len() - 1;
        let mut fan_in = architecture.inputs;
        let mut layers = Vec::with_capacity(architecture.layer_sizes.len());
        for (i, &size) in architecture.layer_sizes.iter().enumerate() {
            let activation = if i == last {
                architecture.output_activation
            } else {
                architecture.hidden_activation
            };
            layers.push(Layer::new(graph, fan_in, size, activation, &architecture.init, rng)?);
            fan_in = size;
        }
        let mlp = Mlp {
            graph: graph.clone(),
            layers,
        };
        log::debug!("Built {} with {} parameters", mlp, mlp.num_parameters());
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The graph holding the parameters.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn num_inputs(&self) -> usize {
        self.layers[0].num_inputs()
    }

    pub fn num_outputs(&self) -> usize {
        self.layers[self.layers.len() - 1].num_outputs()
    }

    /// Forward-only evaluation on plain numbers.
    ///
    /// The nodes built for the evaluation are discarded before returning.
    pub fn predict(&self, inputs: &[f64]) -> Result<Vec<f64>, ScalarGradError> {
        let checkpoint = self.graph.checkpoint();
        let xs: Vec<Value> = inputs.iter().map(|&x| self.graph.constant(x)).collect();
        let result = self
            .forward(&xs)
            .map(|outputs| outputs.iter().map(Value::data).collect());
        self.graph.rewind(checkpoint);
        result
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (param_name, param) in layer.named_parameters() {
                params.push((format!("layer{}.{}", i, param_name), param));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.layers.iter().map(|l| l as &dyn Module).collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MLP of [")?;
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", layer)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
