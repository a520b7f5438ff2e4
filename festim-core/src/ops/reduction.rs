// src/ops/reduction.rs

use ndarray::{ArrayD, Axis};
use num_traits::{Float, FromPrimitive};

use crate::error::FestimError;

/// Smallest element of `array`, or `None` for an empty array.
///
/// Any NaN entry makes the result NaN.
pub fn reduce_min<A: Float>(array: &ArrayD<A>) -> Option<A> {
    array.iter().copied().reduce(|a, b| nan_or(a, b, A::min))
}

/// Largest element of `array`, or `None` for an empty array. NaN propagates.
pub fn reduce_max<A: Float>(array: &ArrayD<A>) -> Option<A> {
    array.iter().copied().reduce(|a, b| nan_or(a, b, A::max))
}

fn nan_or<A: Float>(a: A, b: A, pick: fn(A, A) -> A) -> A {
    if a.is_nan() || b.is_nan() {
        A::nan()
    } else {
        pick(a, b)
    }
}

/// Mean over the given `axes`; all axes when `axes` is `None`.
///
/// Reduced axes are removed from the result.
///
/// # Errors
/// Returns `FestimError::InvalidArgument` for an out-of-range or repeated axis,
/// and when asked to average over an empty axis.
pub fn reduce_mean<A: Float + FromPrimitive + 'static>(
    array: &ArrayD<A>,
    axes: Option<&[usize]>,
) -> Result<ArrayD<A>, FestimError> {
    let rank = array.ndim();
    let mut axes: Vec<usize> = match axes {
        Some(axes) => axes.to_vec(),
        None => (0..rank).collect(),
    };
    axes.sort_unstable();
    if axes.windows(2).any(|w| w[0] == w[1]) || axes.iter().any(|&a| a >= rank) {
        return Err(FestimError::InvalidArgument(format!(
            "invalid reduction axes {:?} for rank {}",
            axes, rank
        )));
    }

    let mut result = array.clone();
    // Highest axis first so the remaining indices stay valid
    for &axis in axes.iter().rev() {
        result = result.mean_axis(Axis(axis)).ok_or_else(|| {
            FestimError::InvalidArgument(format!("cannot average over empty axis {}", axis))
        })?;
    }
    Ok(result)
}

#[cfg(test)]
#[path = "reduction_test.rs"]
mod tests;
