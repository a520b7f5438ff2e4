// src/losses/l1.rs

use ndarray::{ArrayD, Axis};

use crate::backend::{to_number, Backend, FromArray, TensorLike};
use crate::error::FestimError;
use crate::ops::{abs_diff, reduce_mean};

/// Mean absolute error between `y_true` and `y_pred`, one value per sample.
///
/// The absolute difference is averaged over every axis except the batch
/// axis, so a `(batch, n_classes)` input yields a `(batch,)` result. Rank-1
/// inputs are viewed as `(batch, 1)` and yield the element-wise absolute
/// difference.
///
/// The result comes back in the backend of `y_pred`.
///
/// ```rust
/// use festim_core::losses::l1_loss;
/// use ndarray::array;
///
/// let y_true = array![[1.0f32], [3.0], [2.0], [0.0]].into_dyn();
/// let y_pred = array![[2.0f32], [0.0], [2.0], [1.0]].into_dyn();
/// let loss = l1_loss(&y_true, &y_pred).unwrap();
/// assert_eq!(loss, array![1.0f32, 3.0, 0.0, 1.0].into_dyn());
/// ```
///
/// # Errors
/// * `FestimError::UnsupportedBackend` if `y_pred` is not a tensor.
/// * `FestimError::ShapeMismatch` if the two inputs have different shapes.
/// * `FestimError::InvalidArgument` for rank-0 inputs.
pub fn l1_loss<T, P>(y_true: &T, y_pred: &P) -> Result<P, FestimError>
where
    T: TensorLike,
    P: TensorLike + FromArray,
{
    match y_pred.backend() {
        Backend::Native | Backend::NdArray => {
            let truth = to_number(y_true)?;
            let pred = to_number(y_pred)?;
            let mae = per_sample_mae(&truth, &pred)?;
            log::debug!("l1_loss: {} backend, output shape {:?}", y_pred.backend(), mae.shape());
            P::from_array(mae)
        }
        backend => Err(FestimError::UnsupportedBackend {
            backend: backend.to_string(),
            operation: "l1_loss".to_string(),
        }),
    }
}

fn per_sample_mae(truth: &ArrayD<f32>, pred: &ArrayD<f32>) -> Result<ArrayD<f32>, FestimError> {
    if truth.shape() != pred.shape() {
        return Err(FestimError::ShapeMismatch {
            expected: pred.shape().to_vec(),
            actual: truth.shape().to_vec(),
            operation: "l1_loss".to_string(),
        });
    }
    if pred.ndim() == 0 {
        return Err(FestimError::InvalidArgument(
            "l1_loss needs at least a batch axis".to_string(),
        ));
    }

    let mut diff = abs_diff(pred, truth)?;
    if diff.ndim() == 1 {
        diff = diff.insert_axis(Axis(1));
    }
    let non_batch: Vec<usize> = (1..diff.ndim()).collect();
    reduce_mean(&diff, Some(&non_batch))
}

#[cfg(test)]
#[path = "l1_test.rs"]
mod tests;
