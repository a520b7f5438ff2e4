use festim_core::ndarray::{self, Array1, ArrayD, ArrayViewD, Axis};
use festim_core::{FestimError, KeyedItem, Record, Value};

/// Stacks a list of records into a single batch record.
///
/// For every key:
/// * scalars become a rank-1 array of length `batch.len()`;
/// * arrays and tensors are stacked along a new leading batch axis, so all of
///   them must share one shape (run `pad_batch` first for ragged data);
/// * text, or a mix of kinds, cannot be collated.
///
/// # Errors
/// * `FestimError::InvalidArgument` for an empty batch.
/// * `FestimError::KeyMismatch` if the records disagree on keys.
/// * `FestimError::ShapeMismatch` for ragged arrays.
/// * `FestimError::UnsupportedOperation` for text or mixed values.
pub fn collate_records(batch: Vec<Record>) -> Result<Record, FestimError> {
    let keys = match batch.first() {
        Some(first) => first.key_set(),
        None => return Err(FestimError::InvalidArgument("cannot collate an empty batch".to_string())),
    };
    for record in &batch {
        let record_keys = record.key_set();
        if record_keys != keys {
            return Err(FestimError::KeyMismatch {
                expected: keys,
                actual: record_keys,
            });
        }
    }

    let mut collated = Record::new();
    for key in keys {
        let column: Vec<&Value> = batch.iter().map(|r| &r[&key]).collect();
        let value = collate_column(&key, &column)?;
        collated.insert(key, value);
    }
    Ok(collated)
}

fn collate_column(key: &str, column: &[&Value]) -> Result<Value, FestimError> {
    if column.iter().all(|v| matches!(v, Value::Scalar(_))) {
        let scalars: Array1<f32> = column
            .iter()
            .map(|v| match v {
                Value::Scalar(s) => *s as f32,
                _ => 0.0,
            })
            .collect();
        return Ok(Value::Array(scalars.into_dyn()));
    }

    if column.iter().all(|v| v.shape().is_some()) {
        let arrays: Vec<ArrayD<f32>> = column.iter().map(|v| v.to_array()).collect::<Result<_, _>>()?;
        let first_shape = arrays[0].shape().to_vec();
        if let Some(ragged) = arrays.iter().find(|a| a.shape() != first_shape.as_slice()) {
            return Err(FestimError::ShapeMismatch {
                expected: first_shape,
                actual: ragged.shape().to_vec(),
                operation: format!("collate key '{}'", key),
            });
        }
        let views: Vec<ArrayViewD<'_, f32>> = arrays.iter().map(|a| a.view()).collect();
        return Ok(Value::Array(ndarray::stack(Axis(0), &views)?));
    }

    Err(FestimError::UnsupportedOperation(format!(
        "cannot collate key '{}': values must all be scalars or all be array-like",
        key
    )))
}
