// src/ops/elementwise.rs

use ndarray::{ArrayD, Zip};
use num_traits::Float;

use crate::error::FestimError;

/// Element-wise `|a - b|`.
///
/// # Errors
/// Returns `FestimError::ShapeMismatch` if the shapes differ; no broadcasting
/// is performed.
pub fn abs_diff<A: Float>(a: &ArrayD<A>, b: &ArrayD<A>) -> Result<ArrayD<A>, FestimError> {
    if a.shape() != b.shape() {
        return Err(FestimError::ShapeMismatch {
            expected: a.shape().to_vec(),
            actual: b.shape().to_vec(),
            operation: "abs_diff".to_string(),
        });
    }
    let mut out = ArrayD::<A>::zeros(a.raw_dim());
    Zip::from(&mut out)
        .and(a)
        .and(b)
        .for_each(|d, &x, &y| *d = (x - y).abs());
    Ok(out)
}
