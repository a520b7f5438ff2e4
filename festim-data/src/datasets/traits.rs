use festim_core::FestimError;

/// Represents a dataset that can be accessed by index.
///
/// A dataset is a collection of items; in festim an item is usually a
/// [`Record`](festim_core::Record) mapping keys to arrays, but any
/// `Send + 'static` type works.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `FestimError` if the index is out of bounds or if there's
    /// an issue retrieving the item.
    fn get(&self, index: usize) -> Result<Self::Item, FestimError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Boxed datasets are datasets too, so sources of different concrete types
/// can be combined behind one item type.
impl<I: Send + 'static> Dataset for Box<dyn Dataset<Item = I> + Send + Sync> {
    type Item = I;

    fn get(&self, index: usize) -> Result<I, FestimError> {
        (**self).get(index)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
