use crate::dataset::Dataset;
use scalargrad_core::ScalarGradError;

/// A simple dataset that wraps a `Vec` of items.
///
/// # Type Parameters
///
/// * `T`: The type of the items stored in the dataset. Must be `Clone + Send + 'static`.
#[derive(Debug, Clone)]
pub struct VecDataset<T: Clone + Send + 'static> {
    data: Vec<T>,
}

impl<T: Clone + Send + 'static> VecDataset<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Borrows the underlying items.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone + Send + 'static> From<Vec<T>> for VecDataset<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: Clone + Send + 'static> Dataset for VecDataset<T> {
    type Item = T;

    /// Returns a clone of the item at `index`.
    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(ScalarGradError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn to_vec(&self) -> Result<Vec<Self::Item>, ScalarGradError> {
        Ok(self.data.clone())
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
