//! Neural network building blocks over scalar [`Value`](crate::value::Value)s:
//! trainable parameters, initializers, activations, neurons, layers and losses.

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

pub use activation::Activation;
pub use init::Initializer;
pub use layers::{Layer, Neuron};
pub use losses::{MseLoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
