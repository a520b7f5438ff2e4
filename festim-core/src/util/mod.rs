//! Numeric and process helpers used around the training loop.

pub mod batch;
pub mod image;
pub mod padding;
pub mod system;
pub mod timer;

pub use batch::get_batch_size;
pub use padding::{pad_batch, pad_data};
pub use system::{cpu_count, get_num_devices};
pub use timer::Timer;
