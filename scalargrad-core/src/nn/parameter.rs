use crate::error::ScalarGradError;
use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A leaf [`Value`] marked as learnable by the module that owns it.
///
/// The optimizer mutates its data in place between training steps; the node
/// itself lives in the persistent prefix of the graph and is reused by every
/// forward pass.
#[derive(Clone)]
pub struct Parameter {
    value: Value,
    name: Option<String>,
}

impl Parameter {
    /// Wraps a leaf value.
    ///
    /// # Errors
    /// `NotALeaf` if `value` was produced by an operation.
    pub fn new(value: Value, name: Option<String>) -> Result<Self, ScalarGradError> {
        if !value.is_leaf() {
            return Err(ScalarGradError::NotALeaf {
                node: value.id().index(),
            });
        }
        Ok(Parameter { value, name })
    }

    pub fn new_unnamed(value: Value) -> Result<Self, ScalarGradError> {
        Parameter::new(value, None)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the Parameter and returns the underlying Value.
    pub fn into_inner(self) -> Value {
        self.value
    }
}

// Allow accessing the underlying Value immutably via Deref.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?}, {:?})", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Graph;

    #[test]
    fn test_parameter_wraps_leaf() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let p = Parameter::new(graph.leaf(0.25), Some("w0".to_string()))?;
        assert_eq!(p.name(), Some("w0"));
        // Deref gives Value methods.
        assert_eq!(p.data(), 0.25);
        p.set_data(0.5)?;
        assert_eq!(p.value().data(), 0.5);
        assert_eq!(p.clone().into_inner().data(), 0.5);
        Ok(())
    }

    #[test]
    fn test_parameter_rejects_non_leaf() {
        let graph = Graph::new();
        let a = graph.leaf(1.0);
        let b = &a * 2.0;
        let err = Parameter::new_unnamed(b.clone()).unwrap_err();
        assert_eq!(err, ScalarGradError::NotALeaf { node: b.id().index() });
    }
}
