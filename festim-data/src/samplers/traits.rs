// festim-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Defines the order in which a [`DataLoader`](crate::DataLoader) visits a dataset.
pub trait Sampler: Debug + Send + Sync {
    /// Returns an iterator over the indices of a dataset of length `dataset_len`.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Returns the total number of indices the iterator will yield.
    fn len(&self, dataset_len: usize) -> usize;
}
