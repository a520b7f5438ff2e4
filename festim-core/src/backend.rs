//! # Backend dispatch
//!
//! Every value the framework moves around (native tensors, plain arrays,
//! bare numbers) implements [`TensorLike`]. Operations that behave differently
//! per backend switch on [`TensorLike::backend`] instead of inspecting
//! concrete types at runtime, and [`FromArray`] lets them hand back a result
//! in the caller's own representation.

use ndarray::{ArrayD, IxDyn};

use crate::error::FestimError;
use crate::tensor::Tensor;

/// Tag identifying which backend a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// The native [`Tensor`] type, which may track gradients.
    Native,
    /// Plain `ndarray` arrays.
    NdArray,
    /// Bare numbers and vectors that are not tensors at all.
    Scalar,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Backend::Native => "native",
            Backend::NdArray => "ndarray",
            Backend::Scalar => "scalar",
        };
        f.write_str(name)
    }
}

/// Capability interface shared by all tensor-ish values.
pub trait TensorLike {
    fn backend(&self) -> Backend;

    fn shape(&self) -> Vec<usize>;

    /// Whether the value is attached to a gradient graph.
    fn requires_grad(&self) -> bool {
        false
    }

    /// Returns a copy detached from any gradient graph.
    fn detach(&self) -> Self
    where
        Self: Sized;

    /// Copies the value into a plain array. May fail while the value still
    /// requires gradients.
    fn to_array(&self) -> Result<ArrayD<f32>, FestimError>;

    fn is_tensor(&self) -> bool {
        self.backend() != Backend::Scalar
    }
}

/// Builds a backend value back from a plain array.
pub trait FromArray: Sized {
    fn from_array(array: ArrayD<f32>) -> Result<Self, FestimError>;
}

impl TensorLike for Tensor {
    fn backend(&self) -> Backend {
        Backend::Native
    }

    fn shape(&self) -> Vec<usize> {
        Tensor::shape(self)
    }

    fn requires_grad(&self) -> bool {
        Tensor::requires_grad(self)
    }

    fn detach(&self) -> Self {
        Tensor::detach(self)
    }

    fn to_array(&self) -> Result<ArrayD<f32>, FestimError> {
        Tensor::to_array(self)
    }
}

impl FromArray for Tensor {
    fn from_array(array: ArrayD<f32>) -> Result<Self, FestimError> {
        Tensor::from_array(&array)
    }
}

impl TensorLike for ArrayD<f32> {
    fn backend(&self) -> Backend {
        Backend::NdArray
    }

    fn shape(&self) -> Vec<usize> {
        ArrayD::shape(self).to_vec()
    }

    fn detach(&self) -> Self {
        self.clone()
    }

    fn to_array(&self) -> Result<ArrayD<f32>, FestimError> {
        Ok(self.clone())
    }
}

impl FromArray for ArrayD<f32> {
    fn from_array(array: ArrayD<f32>) -> Result<Self, FestimError> {
        Ok(array)
    }
}

impl TensorLike for Vec<f32> {
    fn backend(&self) -> Backend {
        Backend::Scalar
    }

    fn shape(&self) -> Vec<usize> {
        vec![self.len()]
    }

    fn detach(&self) -> Self {
        self.clone()
    }

    fn to_array(&self) -> Result<ArrayD<f32>, FestimError> {
        Ok(ArrayD::from_shape_vec(IxDyn(&[self.len()]), self.clone())?)
    }
}

impl FromArray for Vec<f32> {
    /// Flattens the array in row-major order.
    fn from_array(array: ArrayD<f32>) -> Result<Self, FestimError> {
        Ok(array.iter().copied().collect())
    }
}

macro_rules! impl_scalar_tensor_like {
    ($($t:ty),*) => {
        $(
            impl TensorLike for $t {
                fn backend(&self) -> Backend {
                    Backend::Scalar
                }

                fn shape(&self) -> Vec<usize> {
                    Vec::new()
                }

                fn detach(&self) -> Self {
                    *self
                }

                fn to_array(&self) -> Result<ArrayD<f32>, FestimError> {
                    Ok(ArrayD::from_elem(IxDyn(&[]), *self as f32))
                }
            }
        )*
    };
}

impl_scalar_tensor_like!(f32, f64, i32, i64);

/// Converts any [`TensorLike`] value into a plain array.
///
/// Values still attached to a gradient graph are detached first; the source
/// value itself is left untouched.
///
/// ```rust
/// use festim_core::backend::to_number;
/// use festim_core::Tensor;
///
/// let five = to_number(&5i64).unwrap();
/// assert_eq!(five.shape(), &[] as &[usize]);
///
/// let t = Tensor::new(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
/// t.set_requires_grad(true).unwrap();
/// assert_eq!(to_number(&t).unwrap().len(), 3);
/// assert!(t.requires_grad());
/// ```
pub fn to_number<T: TensorLike>(data: &T) -> Result<ArrayD<f32>, FestimError> {
    if data.requires_grad() {
        data.detach().to_array()
    } else {
        data.to_array()
    }
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
