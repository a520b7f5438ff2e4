// dataloader.rs
//! # DataLoader
//!
//! Batches the records of a [`Dataset`] in the order given by a
//! [`Sampler`], optionally padding ragged arrays, and collates each batch
//! into a single [`Record`] whose arrays carry a leading batch axis.
//!
//! ```rust
//! use festim_core::{Record, Value};
//! use festim_data::{DataLoader, SequentialSampler, VecDataset};
//!
//! let records: Vec<Record> = (0..5)
//!     .map(|i| [("y".to_string(), Value::Scalar(i as f64))].into_iter().collect())
//!     .collect();
//! let loader = DataLoader::new(VecDataset::new(records), 2, SequentialSampler::new(), false);
//! let sizes: Vec<usize> = loader
//!     .map(|batch| batch.unwrap()["y"].shape().unwrap()[0])
//!     .collect();
//! assert_eq!(sizes, vec![2, 2, 1]);
//! ```

use festim_core::util::pad_batch;
use festim_core::{FestimError, Record};

use crate::collate::collate_records;
use crate::datasets::Dataset;
use crate::samplers::Sampler;

/// Custom collation from a list of records to one batch record.
pub type CollateFn = Box<dyn Fn(Vec<Record>) -> Result<Record, FestimError> + Send + Sync>;

/// Batching loader over a record dataset.
pub struct DataLoader<D: Dataset<Item = Record>, S: Sampler> {
    /// The source dataset.
    pub dataset: D,
    /// Number of records per batch.
    pub batch_size: usize,
    /// Generates the visiting order.
    pub sampler: S,
    /// If true, a trailing incomplete batch is skipped.
    pub drop_last: bool,
    /// If set, ragged arrays are padded with this value before collation.
    pub pad_value: Option<f32>,
    collate_fn: CollateFn,
    indices_iter: Box<dyn Iterator<Item = usize> + Send + Sync>,
}

impl<D: Dataset<Item = Record>, S: Sampler> DataLoader<D, S> {
    /// Creates a loader using [`collate_records`] and no padding.
    pub fn new(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Self {
        let indices_iter = sampler.iter(dataset.len());
        Self {
            dataset,
            batch_size: batch_size.max(1),
            sampler,
            drop_last,
            pad_value: None,
            collate_fn: Box::new(collate_records),
            indices_iter,
        }
    }

    /// Pads ragged arrays in each batch with `pad_value` before collation.
    pub fn with_padding(mut self, pad_value: f32) -> Self {
        self.pad_value = Some(pad_value);
        self
    }

    /// Replaces the default collation.
    pub fn with_collate_fn(mut self, collate_fn: CollateFn) -> Self {
        self.collate_fn = collate_fn;
        self
    }

    /// Number of batches one pass over the dataset yields.
    pub fn num_batches(&self) -> usize {
        let n = self.sampler.len(self.dataset.len());
        if self.drop_last {
            n / self.batch_size
        } else {
            n.div_ceil(self.batch_size)
        }
    }

    /// Starts a new pass over the dataset (a new epoch).
    pub fn reset(&mut self) {
        self.indices_iter = self.sampler.iter(self.dataset.len());
    }
}

impl<D: Dataset<Item = Record>, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Record, FestimError>;

    /// Returns the next collated batch, `Some(Err(_))` if fetching, padding or
    /// collating failed, or `None` once the pass is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for _ in 0..self.batch_size {
            match self.indices_iter.next() {
                Some(idx) => match self.dataset.get(idx) {
                    Ok(item) => batch.push(item),
                    Err(e) => return Some(Err(e)),
                },
                None => break,
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        if let Some(pad_value) = self.pad_value {
            if let Err(e) = pad_batch(&mut batch, pad_value) {
                return Some(Err(e));
            }
        }
        Some((self.collate_fn)(batch))
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
