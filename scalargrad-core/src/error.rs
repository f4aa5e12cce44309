use thiserror::Error;

/// Broad category of a [`ScalarGradError`].
///
/// Hosts usually only care about the category: construction and configuration
/// errors are fixed by changing inputs, numeric errors abort a training step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Construction,
    Numeric,
    Configuration,
    Graph,
    Data,
}

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    // --- Construction ---
    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Layer {layer} has zero width")]
    ZeroWidthLayer { layer: usize },

    #[error("Input width mismatch: expected {expected}, got {actual}")]
    InputWidthMismatch { expected: usize, actual: usize },

    #[error("Invalid initializer: {0}")]
    InvalidInitializer(String),

    // --- Numeric ---
    #[error("Division by zero during operation {operation}")]
    DivisionByZero { operation: String },

    #[error("Invalid power: {base} ^ {exponent}")]
    InvalidPower { base: f64, exponent: f64 },

    #[error("Operation {operation} produced a non-finite value: {value}")]
    NonFinite { operation: String, value: f64 },

    // --- Configuration ---
    #[error("Invalid learning rate: {0} (must be finite and > 0)")]
    InvalidLearningRate(f64),

    #[error("Invalid step count: {steps} (must be at most {max})")]
    InvalidStepCount { steps: i64, max: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to parse {key}={value:?}: {message}")]
    ConfigParse {
        key: String,
        value: String,
        message: String,
    },

    // --- Graph misuse ---
    #[error("Values belong to different graphs in operation {operation}")]
    GraphMismatch { operation: String },

    #[error("Cannot set data on non-leaf node {node}")]
    NotALeaf { node: usize },

    // --- Data ---
    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl ScalarGradError {
    /// Returns the broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScalarGradError::InvalidArchitecture(_)
            | ScalarGradError::ZeroWidthLayer { .. }
            | ScalarGradError::InputWidthMismatch { .. }
            | ScalarGradError::InvalidInitializer(_) => ErrorKind::Construction,
            ScalarGradError::DivisionByZero { .. }
            | ScalarGradError::InvalidPower { .. }
            | ScalarGradError::NonFinite { .. } => ErrorKind::Numeric,
            ScalarGradError::InvalidLearningRate(_)
            | ScalarGradError::InvalidStepCount { .. }
            | ScalarGradError::InvalidConfiguration(_)
            | ScalarGradError::ConfigParse { .. } => ErrorKind::Configuration,
            ScalarGradError::GraphMismatch { .. } | ScalarGradError::NotALeaf { .. } => {
                ErrorKind::Graph
            }
            ScalarGradError::IndexOutOfBounds { .. } => ErrorKind::Data,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::Numeric`.
    pub fn is_numeric(&self) -> bool {
        self.kind() == ErrorKind::Numeric
    }
}
