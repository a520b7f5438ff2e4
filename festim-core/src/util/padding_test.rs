use super::*;
use crate::tensor::Tensor;
use ndarray::{array, Array2};

fn record(pairs: Vec<(&str, Value)>) -> Record {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

#[test]
fn test_pad_data_appends_at_high_end() {
    let x = array![[1.0f32, 1.0]].into_dyn();
    let padded = pad_data(&x, &[3, 3], -2.0).unwrap();
    assert_eq!(
        padded,
        array![[1.0f32, 1.0, -2.0], [-2.0, -2.0, -2.0], [-2.0, -2.0, -2.0]].into_dyn()
    );
}

#[test]
fn test_pad_data_errors() {
    let x = array![[1.0f32, 1.0]].into_dyn();
    assert!(matches!(pad_data(&x, &[3, 3, 3], 0.0), Err(FestimError::RankMismatch { .. })));
    assert!(matches!(
        pad_data(&x, &[4, 1], 0.0),
        Err(FestimError::PaddingTargetTooSmall { .. })
    ));
}

#[test]
fn test_pad_data_same_shape_is_copy() {
    let x = array![[1.0f32, 2.0], [3.0, 4.0]].into_dyn();
    assert_eq!(pad_data(&x, &[2, 2], 9.0).unwrap(), x);
}

#[test]
fn test_pad_batch_to_elementwise_max() {
    let mut batch = vec![
        record(vec![("x", Value::Array(Array2::<f32>::ones((2, 2)).into_dyn())), ("y", Value::Scalar(8.0))]),
        record(vec![("x", Value::Array(Array2::<f32>::ones((3, 1)).into_dyn())), ("y", Value::Scalar(4.0))]),
    ];
    pad_batch(&mut batch, 0.0).unwrap();

    assert_eq!(
        batch[0]["x"],
        Value::Array(array![[1.0f32, 1.0], [1.0, 1.0], [0.0, 0.0]].into_dyn())
    );
    assert_eq!(
        batch[1]["x"],
        Value::Array(array![[1.0f32, 0.0], [1.0, 0.0], [1.0, 0.0]].into_dyn())
    );
    assert_eq!(batch[0]["y"], Value::Scalar(8.0));
    assert_eq!(batch[1]["y"], Value::Scalar(4.0));
}

#[test]
fn test_pad_batch_converts_tensors() {
    let t = Tensor::new(vec![5.0], vec![1]).unwrap();
    let mut batch = vec![
        record(vec![("x", Value::Tensor(t))]),
        record(vec![("x", Value::Array(array![1.0f32, 2.0].into_dyn()))]),
    ];
    pad_batch(&mut batch, -1.0).unwrap();
    assert_eq!(batch[0]["x"], Value::Array(array![5.0f32, -1.0].into_dyn()));
}

#[test]
fn test_pad_batch_rank_mismatch() {
    let mut batch = vec![
        record(vec![("x", Value::Array(Array2::<f32>::ones((2, 2)).into_dyn()))]),
        record(vec![("x", Value::Array(array![1.0f32].into_dyn()))]),
    ];
    assert!(matches!(pad_batch(&mut batch, 0.0), Err(FestimError::RankMismatch { .. })));
}

#[test]
fn test_pad_batch_key_mismatch() {
    let mut batch = vec![
        record(vec![("x", Value::Scalar(1.0))]),
        record(vec![("z", Value::Scalar(1.0))]),
    ];
    assert!(matches!(pad_batch(&mut batch, 0.0), Err(FestimError::KeyMismatch { .. })));
}
