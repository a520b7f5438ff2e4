//! # festim-data
//!
//! Indexable datasets, dataset combinators, index samplers and a
//! [`DataLoader`] that turns keyed records into padded, collated batches.

pub mod collate;
pub mod dataloader;
pub mod datasets;
pub mod samplers;

pub use collate::collate_records;
pub use dataloader::DataLoader;
pub use datasets::{CombinedDataset, Dataset, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
