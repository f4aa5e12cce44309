use scalargrad_core::ScalarGradError;

/// Represents a dataset that can be accessed by index.
///
/// An item is whatever one training example looks like for the consumer, most
/// often a [`Sample`](scalargrad_core::Sample).
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `ScalarGradError::IndexOutOfBounds` if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collects every item in index order.
    fn to_vec(&self) -> Result<Vec<Self::Item>, ScalarGradError> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }
}
