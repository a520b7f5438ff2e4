//! # festim-core
//!
//! Backend-neutral building blocks of the festim training framework:
//! a native tensor type, the [`TensorLike`] capability trait used to
//! dispatch across backends, array reductions, losses, and the numeric and
//! process helpers used around the training loop (batch padding, batch size
//! inference, thread and device counts).

pub mod backend;
pub mod buffer;
pub mod error;
pub mod logging;
pub mod losses;
pub mod ops;
pub mod tensor;
pub mod tensor_data;
pub mod types;
pub mod util;
pub mod value;

pub use backend::{to_number, Backend, FromArray, TensorLike};
pub use error::{ErrorCategory, FestimError};
pub use tensor::Tensor;
pub use types::DType;
pub use value::{KeyedItem, Record, Value};

// Re-export so downstream crates agree on the array type.
pub use ndarray;
