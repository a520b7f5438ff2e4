use festim_core::ndarray::{ArrayD, Zip};
use festim_core::ops::{reduce_max, reduce_min};
use festim_core::FestimError;

/// Overlays a saliency `mask` on the sample `value` it was computed for.
///
/// The result is a linear combination of the value rescaled by the mask,
/// the value itself, and the mask stretched over the value's range:
///
/// `0.3 * (mask * (value - min) + min) + 0.3 * value + 0.4 * mask * (max - min) + min`
///
/// where `min`/`max` are taken over the whole `value` array. The mask is
/// broadcast against `value`.
///
/// # Errors
/// * `FestimError::InvalidArgument` for an empty `value`.
/// * `FestimError::ShapeMismatch` if `mask` does not broadcast to `value`.
pub fn blend_saliency(value: &ArrayD<f32>, mask: &ArrayD<f32>) -> Result<ArrayD<f32>, FestimError> {
    let (min, max) = match (reduce_min(value), reduce_max(value)) {
        (Some(min), Some(max)) => (min, max),
        _ => return Err(FestimError::InvalidArgument("cannot blend an empty array".to_string())),
    };
    let diff = max - min;
    let mask = mask.broadcast(value.raw_dim()).ok_or_else(|| FestimError::ShapeMismatch {
        expected: value.shape().to_vec(),
        actual: mask.shape().to_vec(),
        operation: "blend_saliency".to_string(),
    })?;

    let mut blended = ArrayD::<f32>::zeros(value.raw_dim());
    Zip::from(&mut blended)
        .and(value)
        .and(&mask)
        .for_each(|b, &v, &m| *b = 0.3 * (m * (v - min) + min) + 0.3 * v + 0.4 * m * diff + min);
    Ok(blended)
}
