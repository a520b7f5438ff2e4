use std::sync::Arc;

use crate::types::DType;

/// Typed CPU storage behind a native [`Tensor`](crate::tensor::Tensor).
///
/// The vectors sit behind an `Arc` so that detached tensors can share
/// the same storage as the tensor they were detached from.
#[derive(Debug, Clone)]
pub enum Buffer {
    /// Buffer holding f32 data.
    F32(Arc<Vec<f32>>),
    /// Buffer holding f64 data.
    F64(Arc<Vec<f64>>),
    /// Buffer holding i64 data, typically class ids.
    I64(Arc<Vec<i64>>),
}

impl Buffer {
    pub fn dtype(&self) -> DType {
        match self {
            Buffer::F32(_) => DType::F32,
            Buffer::F64(_) => DType::F64,
            Buffer::I64(_) => DType::I64,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Buffer::F32(data) => data.len(),
            Buffer::F64(data) => data.len(),
            Buffer::I64(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the buffer into a flat `f32` vector, casting when needed.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        match self {
            Buffer::F32(data) => data.as_ref().clone(),
            Buffer::F64(data) => data.iter().map(|&v| v as f32).collect(),
            Buffer::I64(data) => data.iter().map(|&v| v as f32).collect(),
        }
    }
}
