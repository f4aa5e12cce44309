pub mod mlp;

pub use mlp::{Architecture, Mlp};
