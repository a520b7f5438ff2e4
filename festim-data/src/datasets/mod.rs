pub mod combined_dataset;
pub mod traits;
pub mod vec_dataset;

pub use combined_dataset::CombinedDataset;
pub use traits::Dataset;
pub use vec_dataset::VecDataset;
