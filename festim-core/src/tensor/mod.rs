// src/tensor/mod.rs

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use ndarray::{ArrayD, IxDyn};

use crate::buffer::Buffer;
use crate::error::FestimError;
use crate::tensor_data::TensorData;
use crate::types::DType;

/// Native backend tensor.
///
/// `Tensor` uses `Arc<RwLock<TensorData>>` internally to allow for:
/// 1.  **Shared Ownership:** clones are cheap and point to the same data.
/// 2.  **Interior Mutability:** `requires_grad` and `grad` can be changed
///     through an immutable handle.
///
/// The gradient machinery itself belongs to the training backend; this type
/// only carries the flags and buffers the rest of the framework inspects.
#[derive(Debug, Clone)]
pub struct Tensor {
    pub(crate) data: Arc<RwLock<TensorData>>,
}

impl Tensor {
    /// Creates a new f32 tensor from row-major `data_vec` and `shape`.
    ///
    /// # Errors
    /// Returns `FestimError::TensorCreation` if the data length does not match the shape.
    pub fn new(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, FestimError> {
        Self::from_buffer(Buffer::F32(Arc::new(data_vec)), shape)
    }

    /// Creates a new f64 tensor.
    pub fn new_f64(data_vec: Vec<f64>, shape: Vec<usize>) -> Result<Self, FestimError> {
        Self::from_buffer(Buffer::F64(Arc::new(data_vec)), shape)
    }

    /// Creates a new i64 tensor.
    pub fn new_i64(data_vec: Vec<i64>, shape: Vec<usize>) -> Result<Self, FestimError> {
        Self::from_buffer(Buffer::I64(Arc::new(data_vec)), shape)
    }

    fn from_buffer(buffer: Buffer, shape: Vec<usize>) -> Result<Self, FestimError> {
        let tensor_data = TensorData::new(buffer, shape)?;
        Ok(Tensor {
            data: Arc::new(RwLock::new(tensor_data)),
        })
    }

    /// Creates an f32 tensor holding a copy of `array`.
    pub fn from_array(array: &ArrayD<f32>) -> Result<Self, FestimError> {
        let shape = array.shape().to_vec();
        // iter() walks in logical row-major order regardless of memory layout
        let data_vec: Vec<f32> = array.iter().copied().collect();
        Self::new(data_vec, shape)
    }

    /// Acquires a read lock on the tensor's data, recovering from poisoning.
    pub fn read_data(&self) -> RwLockReadGuard<'_, TensorData> {
        self.data.read().unwrap_or_else(|poisoned| {
            log::warn!("RwLock for tensor data was poisoned. Recovering read guard.");
            poisoned.into_inner()
        })
    }

    /// Acquires a write lock on the tensor's data, recovering from poisoning.
    pub fn write_data(&self) -> RwLockWriteGuard<'_, TensorData> {
        self.data.write().unwrap_or_else(|poisoned| {
            log::warn!("RwLock for tensor data was poisoned. Recovering write guard.");
            poisoned.into_inner()
        })
    }

    pub fn dtype(&self) -> DType {
        self.read_data().dtype()
    }

    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape.clone()
    }

    pub fn rank(&self) -> usize {
        self.read_data().shape.len()
    }

    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// Marks the tensor as tracked (or untracked) by the gradient backend.
    ///
    /// # Errors
    /// Integer tensors cannot require gradients.
    pub fn set_requires_grad(&self, requires_grad: bool) -> Result<(), FestimError> {
        let mut guard = self.write_data();
        if requires_grad && !guard.dtype().is_floating_point() {
            return Err(FestimError::UnsupportedOperation(format!(
                "requires_grad on non floating point dtype {:?}",
                guard.dtype()
            )));
        }
        guard.requires_grad = requires_grad;
        if !requires_grad {
            guard.grad = None;
        }
        Ok(())
    }

    pub fn grad(&self) -> Option<Tensor> {
        self.read_data().grad.clone()
    }

    /// Stores a gradient for this tensor. The gradient must match the tensor's shape.
    pub fn set_grad(&self, grad: Option<Tensor>) -> Result<(), FestimError> {
        if let Some(ref g) = grad {
            let expected = self.shape();
            let actual = g.shape();
            if expected != actual {
                return Err(FestimError::ShapeMismatch {
                    expected,
                    actual,
                    operation: "set_grad".to_string(),
                });
            }
        }
        self.write_data().grad = grad;
        Ok(())
    }

    /// Returns a tensor sharing this tensor's buffer but cut off from gradient tracking.
    pub fn detach(&self) -> Tensor {
        let guard = self.read_data();
        let detached = TensorData::detached(Arc::clone(&guard.buffer), guard.shape.clone());
        Tensor {
            data: Arc::new(RwLock::new(detached)),
        }
    }

    /// Copies the tensor into a plain f32 array.
    ///
    /// # Errors
    /// Returns `FestimError::UnsupportedOperation` if the tensor still requires
    /// gradients; call [`Tensor::detach`] first.
    pub fn to_array(&self) -> Result<ArrayD<f32>, FestimError> {
        let guard = self.read_data();
        if guard.requires_grad {
            return Err(FestimError::UnsupportedOperation(
                "cannot convert a tensor that requires grad, detach it first".to_string(),
            ));
        }
        let values = guard.buffer.to_f32_vec();
        Ok(ArrayD::from_shape_vec(IxDyn(&guard.shape), values)?)
    }

    /// Returns a new tensor with the axes reordered according to `axes`.
    pub fn permute(&self, axes: &[usize]) -> Result<Tensor, FestimError> {
        let rank = self.rank();
        let mut seen = vec![false; rank];
        if axes.len() != rank || axes.iter().any(|&a| a >= rank || std::mem::replace(&mut seen[a], true)) {
            return Err(FestimError::InvalidArgument(format!(
                "{:?} is not a permutation of {} axes",
                axes, rank
            )));
        }
        let array = self.detach().to_array()?;
        let permuted = array.permuted_axes(IxDyn(axes));
        Tensor::from_array(&permuted)
    }
}

impl PartialEq for Tensor {
    /// Tensors are equal when they hold the same values in the same shape.
    fn eq(&self, other: &Self) -> bool {
        match (self.detach().to_array(), other.detach().to_array()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
