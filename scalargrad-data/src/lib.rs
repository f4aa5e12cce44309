//! Datasets feeding the scalargrad training loop.
//!
//! A [`Dataset`] hands out items by index. [`VecDataset`] wraps an owned `Vec`;
//! [`GridDataset`] samples a target function on an evenly spaced grid and
//! produces [`Sample`](scalargrad_core::Sample) items the
//! [`Trainer`](scalargrad_core::Trainer) consumes directly.

pub mod dataset;
pub mod datasets;
pub mod grid;

pub use dataset::Dataset;
pub use datasets::{GridDataset, VecDataset};
pub use grid::linspace;
