use std::collections::BTreeSet;

use crate::error::FestimError;
use crate::value::Record;

/// Infers the batch size of a batch record.
///
/// Values without a shape, and rank-0 arrays, are ignored. All remaining
/// values must agree on their first dimension.
///
/// # Errors
/// Returns `FestimError::BatchSizeMismatch` when the first dimensions
/// disagree, or when no value carries a batch dimension at all.
pub fn get_batch_size(data: &Record) -> Result<usize, FestimError> {
    let sizes: BTreeSet<usize> = data
        .values()
        .filter_map(|v| v.shape())
        .filter_map(|shape| shape.first().copied())
        .collect();
    if sizes.len() != 1 {
        return Err(FestimError::BatchSizeMismatch {
            sizes: sizes.into_iter().collect(),
        });
    }
    sizes
        .into_iter()
        .next()
        .ok_or_else(|| FestimError::Internal("batch size set emptied unexpectedly".to_string()))
}
