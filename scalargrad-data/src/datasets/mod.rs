pub mod grid_dataset;
pub mod vec_dataset;

pub use grid_dataset::GridDataset;
pub use vec_dataset::VecDataset;
