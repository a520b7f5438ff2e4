// src/tensor_data.rs
use std::sync::Arc;

use crate::buffer::Buffer;
use crate::error::FestimError;
use crate::tensor::Tensor;
use crate::types::DType;

/// Internal storage and metadata for a native [`Tensor`].
///
/// Wrapped in `Arc<RwLock<TensorData>>` by `Tensor` so that flags such as
/// `requires_grad` can be flipped through a shared handle.
#[derive(Debug)]
pub struct TensorData {
    /// The underlying typed buffer, shared between a tensor and its detached copies.
    pub(crate) buffer: Arc<Buffer>,
    /// The shape (dimensions) of the tensor. Storage is always contiguous row-major.
    pub(crate) shape: Vec<usize>,
    /// Whether the owning backend tracks gradients for this tensor.
    pub(crate) requires_grad: bool,
    /// Gradient written by the backend after a backward pass, if any.
    pub(crate) grad: Option<Tensor>,
}

impl TensorData {
    /// Builds tensor metadata around `buffer`, checking that its length matches `shape`.
    pub fn new(buffer: Buffer, shape: Vec<usize>) -> Result<Self, FestimError> {
        let numel: usize = shape.iter().product();
        let data_len = buffer.len();
        if data_len != numel {
            return Err(FestimError::TensorCreation { data_len, shape });
        }
        Ok(TensorData {
            buffer: Arc::new(buffer),
            shape,
            requires_grad: false,
            grad: None,
        })
    }

    /// Metadata for a tensor sharing `buffer` with another tensor but carrying
    /// none of its gradient state.
    pub(crate) fn detached(buffer: Arc<Buffer>, shape: Vec<usize>) -> Self {
        TensorData {
            buffer,
            shape,
            requires_grad: false,
            grad: None,
        }
    }

    pub fn buffer(&self) -> &Arc<Buffer> {
        &self.buffer
    }

    pub fn dtype(&self) -> DType {
        self.buffer.dtype()
    }

    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }
}
