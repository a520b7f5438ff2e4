// src/ops/manipulation.rs

use ndarray::{ArrayD, ArrayViewD, Axis};

use crate::error::FestimError;

/// Removes every axis of length 1.
pub fn squeeze<A: Clone>(array: &ArrayD<A>) -> ArrayD<A> {
    let mut out = array.clone();
    for axis in (0..array.ndim()).rev() {
        if array.shape()[axis] == 1 {
            out = out.index_axis_move(Axis(axis), 0);
        }
    }
    out
}

/// Concatenates `arrays` along the batch axis (axis 0).
///
/// # Errors
/// Returns `FestimError::EmptyArrayList` for an empty input and
/// `FestimError::ShapeMismatch` when the non-batch dimensions disagree.
pub fn concat<A: Clone>(arrays: &[ArrayD<A>]) -> Result<ArrayD<A>, FestimError> {
    let first = arrays.first().ok_or(FestimError::EmptyArrayList)?;
    for other in &arrays[1..] {
        if other.ndim() != first.ndim() || other.ndim() == 0 || other.shape()[1..] != first.shape()[1..] {
            return Err(FestimError::ShapeMismatch {
                expected: first.shape().to_vec(),
                actual: other.shape().to_vec(),
                operation: "concat".to_string(),
            });
        }
    }
    let views: Vec<ArrayViewD<'_, A>> = arrays.iter().map(|a| a.view()).collect();
    Ok(ndarray::concatenate(Axis(0), &views)?)
}
