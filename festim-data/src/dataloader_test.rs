use super::*;
use crate::datasets::VecDataset;
use crate::samplers::{RandomSampler, SequentialSampler};
use festim_core::ndarray::{array, ArrayD, IxDyn};
use festim_core::Value;

fn rec(x_shape: &[usize], y: f64) -> Record {
    [
        ("x".to_string(), Value::Array(ArrayD::from_elem(IxDyn(x_shape), 1.0))),
        ("y".to_string(), Value::Scalar(y)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_batches_in_order_with_remainder() {
    let data = VecDataset::new((0..5).map(|i| rec(&[2], i as f64)).collect());
    let loader = DataLoader::new(data, 2, SequentialSampler::new(), false);
    assert_eq!(loader.num_batches(), 3);
    let batches: Vec<Record> = loader.map(|b| b.unwrap()).collect();
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0]["x"].shape(), Some(vec![2, 2]));
    assert_eq!(batches[2]["y"], Value::Array(array![4.0f32].into_dyn()));
}

#[test]
fn test_drop_last() {
    let data = VecDataset::new((0..5).map(|i| rec(&[2], i as f64)).collect());
    let loader = DataLoader::new(data, 2, SequentialSampler::new(), true);
    assert_eq!(loader.num_batches(), 2);
    assert_eq!(loader.count(), 2);
}

#[test]
fn test_ragged_batch_needs_padding() {
    let records = vec![rec(&[2, 2], 0.0), rec(&[3, 1], 1.0)];
    let mut unpadded = DataLoader::new(VecDataset::new(records.clone()), 2, SequentialSampler::new(), false);
    assert!(matches!(unpadded.next(), Some(Err(FestimError::ShapeMismatch { .. }))));

    let mut padded = DataLoader::new(VecDataset::new(records), 2, SequentialSampler::new(), false).with_padding(0.0);
    let batch = padded.next().unwrap().unwrap();
    assert_eq!(batch["x"].shape(), Some(vec![2, 3, 2]));
}

#[test]
fn test_reset_starts_a_new_epoch() {
    let data = VecDataset::new((0..4).map(|i| rec(&[1], i as f64)).collect());
    let mut loader = DataLoader::new(data, 4, RandomSampler::new(false, None).with_seed(3), false);
    let first = loader.next().unwrap().unwrap();
    assert!(loader.next().is_none());
    loader.reset();
    let again = loader.next().unwrap().unwrap();
    assert_eq!(first, again);
}

#[test]
fn test_custom_collate() {
    let data = VecDataset::new((0..3).map(|i| rec(&[1], i as f64)).collect());
    let loader = DataLoader::new(data, 3, SequentialSampler::new(), false)
        .with_collate_fn(Box::new(|batch: Vec<Record>| Ok(batch.into_iter().next().unwrap_or_default())));
    let only: Vec<Record> = loader.map(|b| b.unwrap()).collect();
    assert_eq!(only[0]["y"], Value::Scalar(0.0));
}
