use crate::error::DataError;

/// Indexed collection of samples.
///
/// `PointSet` is the implementation used by the losses: each item is one
/// `(x, y)` coordinate pair.
pub trait Dataset {
    /// The type of a single sample.
    type Item: Send + 'static;

    /// Returns the sample at `index`.
    ///
    /// # Errors
    ///
    /// `DataError::IndexOutOfBounds` if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item, DataError>;

    /// Number of samples.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
