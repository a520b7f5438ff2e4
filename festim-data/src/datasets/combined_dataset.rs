use festim_core::{FestimError, KeyedItem};

use super::traits::Dataset;

/// Concatenation of several datasets that share the same keys.
///
/// Logical index `i` is served by the first source whose cumulative end
/// offset exceeds `i`. Only the first item of each source is inspected when
/// checking that the keys agree; later items are trusted to follow suit.
///
/// ```rust
/// use festim_core::{Record, Value};
/// use festim_data::{CombinedDataset, Dataset, VecDataset};
///
/// let rec = |x: f64| -> Record { [("x".to_string(), Value::Scalar(x))].into_iter().collect() };
/// let a = VecDataset::new(vec![rec(0.0), rec(1.0)]);
/// let b = VecDataset::new(vec![rec(2.0)]);
/// let combined = CombinedDataset::new(vec![a, b]).unwrap();
/// assert_eq!(combined.len(), 3);
/// assert_eq!(combined.get(2).unwrap()["x"], Value::Scalar(2.0));
/// ```
#[derive(Debug, Clone)]
pub struct CombinedDataset<D: Dataset> {
    datasets: Vec<D>,
}

impl<D> CombinedDataset<D>
where
    D: Dataset,
    D::Item: KeyedItem,
{
    /// Combines `datasets` in the given order.
    ///
    /// # Errors
    /// * `FestimError::TooFewSources` if fewer than 2 datasets are given.
    /// * `FestimError::KeyMismatch` if the first item of any dataset has
    ///   different keys than the first item of the first dataset.
    /// * Any error raised while fetching those first items (e.g. an empty source).
    pub fn new(datasets: Vec<D>) -> Result<Self, FestimError> {
        if datasets.len() < 2 {
            return Err(FestimError::TooFewSources {
                required: 2,
                actual: datasets.len(),
            });
        }
        let keys = datasets[0].get(0)?.key_set();
        for ds in &datasets[1..] {
            let other = ds.get(0)?.key_set();
            if other != keys {
                return Err(FestimError::KeyMismatch {
                    expected: keys,
                    actual: other,
                });
            }
        }
        log::debug!(
            "CombinedDataset: {} sources, {} items, keys {:?}",
            datasets.len(),
            datasets.iter().map(Dataset::len).sum::<usize>(),
            keys
        );
        Ok(Self { datasets })
    }
}

impl<D: Dataset> CombinedDataset<D> {
    /// Maps a logical index to `(source index, local index)`.
    pub fn locate(&self, index: usize) -> Option<(usize, usize)> {
        let mut start = 0;
        for (source, ds) in self.datasets.iter().enumerate() {
            let end = start + ds.len();
            if index < end {
                return Some((source, index - start));
            }
            start = end;
        }
        None
    }
}

impl<D: Dataset> Dataset for CombinedDataset<D> {
    type Item = D::Item;

    /// # Errors
    /// Returns `FestimError::IndexOutOfBounds` if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item, FestimError> {
        match self.locate(index) {
            Some((source, local)) => self.datasets[source].get(local),
            None => Err(FestimError::IndexOutOfBounds {
                index: vec![index],
                shape: vec![self.len()],
            }),
        }
    }

    fn len(&self) -> usize {
        self.datasets.iter().map(Dataset::len).sum()
    }
}

#[cfg(test)]
#[path = "combined_dataset_test.rs"]
mod tests;
