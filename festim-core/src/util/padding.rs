use ndarray::{ArrayD, IxDyn, Slice};

use crate::error::FestimError;
use crate::value::{KeyedItem, Record, Value};

/// Pads `data` by appending `pad_value` along each axis until `target_shape` is reached.
///
/// Padding only ever happens at the high end of an axis, so the original
/// values keep their indices.
///
/// ```rust
/// use festim_core::util::pad_data;
/// use ndarray::array;
///
/// let x = array![[1.0f32, 1.0]].into_dyn();
/// let padded = pad_data(&x, &[3, 3], -2.0).unwrap();
/// assert_eq!(
///     padded,
///     array![[1.0f32, 1.0, -2.0], [-2.0, -2.0, -2.0], [-2.0, -2.0, -2.0]].into_dyn()
/// );
/// assert!(pad_data(&x, &[3, 3, 3], -2.0).is_err());
/// ```
///
/// # Errors
/// * `FestimError::RankMismatch` if `target_shape` has a different rank than `data`.
/// * `FestimError::PaddingTargetTooSmall` if any target dimension is smaller than the data.
pub fn pad_data(data: &ArrayD<f32>, target_shape: &[usize], pad_value: f32) -> Result<ArrayD<f32>, FestimError> {
    let shape = data.shape();
    if shape.len() != target_shape.len() {
        return Err(FestimError::RankMismatch {
            key: "<data>".to_string(),
            ranks: vec![shape.len(), target_shape.len()],
        });
    }
    if shape.iter().zip(target_shape).any(|(s, t)| s > t) {
        return Err(FestimError::PaddingTargetTooSmall {
            shape: shape.to_vec(),
            target: target_shape.to_vec(),
        });
    }

    let mut padded = ArrayD::from_elem(IxDyn(target_shape), pad_value);
    padded
        .slice_each_axis_mut(|ax| Slice::from(0..shape[ax.axis.index()]))
        .assign(data);
    Ok(padded)
}

/// Pads a batch of records in place so that every array-like value under a
/// given key ends up with the same shape.
///
/// For each key whose shapes differ across the batch, every value is padded
/// with `pad_value` up to the element-wise maximum shape. Values without a
/// shape (scalars, text) are left alone. Native tensors that need padding are
/// converted to plain arrays.
///
/// # Errors
/// * `FestimError::KeyMismatch` if the records do not share the same keys.
/// * `FestimError::RankMismatch` if the shapes under one key have different ranks.
pub fn pad_batch(batch: &mut [Record], pad_value: f32) -> Result<(), FestimError> {
    let keys = match batch.first() {
        Some(first) => first.key_set(),
        None => return Ok(()),
    };
    for record in batch.iter() {
        let record_keys = record.key_set();
        if record_keys != keys {
            return Err(FestimError::KeyMismatch {
                expected: keys,
                actual: record_keys,
            });
        }
    }

    for key in &keys {
        let shapes: Vec<Vec<usize>> = batch.iter().filter_map(|r| r[key].shape()).collect();
        let all_same = shapes.windows(2).all(|w| w[0] == w[1]);
        if all_same {
            continue;
        }
        let mut ranks: Vec<usize> = shapes.iter().map(Vec::len).collect();
        ranks.dedup();
        if ranks.iter().any(|&r| r != ranks[0]) {
            return Err(FestimError::RankMismatch {
                key: key.clone(),
                ranks,
            });
        }
        let max_shape: Vec<usize> = (0..ranks[0])
            .map(|axis| shapes.iter().map(|s| s[axis]).max().unwrap_or(0))
            .collect();
        log::debug!("pad_batch: padding key '{}' to {:?}", key, max_shape);

        for record in batch.iter_mut() {
            if let Some(value) = record.get_mut(key) {
                if value.shape().is_some() {
                    let padded = pad_data(&value.to_array()?, &max_shape, pad_value)?;
                    *value = Value::Array(padded);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "padding_test.rs"]
mod tests;
