use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `inputs`: One value per input unit.
    ///
    /// # Returns
    /// One value per output unit, or a `ScalarGradError` if the input width is
    /// wrong or an operation fails numerically.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns every learnable parameter in a fixed order that is stable across
    /// calls: sub-module by sub-module, weights before bias.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Same order as [`Module::parameters`], with hierarchical names such as
    /// `layer1.neuron3.w0`.
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Returns a vector of direct child `Module`s.
    /// For modules that do not contain other modules, this should return an empty vector.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Graph;

    #[derive(Debug)]
    struct MockModule {
        param: Parameter,
    }

    impl Module for MockModule {
        fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
            inputs
                .iter()
                .map(|x| crate::ops::arithmetic::mul_op(x, &self.param))
                .collect()
        }

        fn parameters(&self) -> Vec<&Parameter> {
            vec![&self.param]
        }

        fn named_parameters(&self) -> Vec<(String, &Parameter)> {
            let name = self.param.name().unwrap_or("param").to_string();
            vec![(name, &self.param)]
        }
    }

    #[test]
    fn test_module_defaults() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let module = MockModule {
            param: Parameter::new_unnamed(graph.leaf(2.0))?,
        };
        assert_eq!(module.num_parameters(), 1);
        assert!(module.children().is_empty());
        assert_eq!(module.named_parameters()[0].0, "param");

        let out = module.forward(&[graph.constant(3.0), graph.constant(-1.0)])?;
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].data(), 6.0);
        assert_eq!(out[1].data(), -2.0);
        Ok(())
    }
}
