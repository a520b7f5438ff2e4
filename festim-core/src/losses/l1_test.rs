use super::*;
use crate::tensor::Tensor;
use approx::assert_relative_eq;
use ndarray::array;

#[test]
fn test_l1_one_hot_rows() {
    let y_true = array![[0.0f32, 1.0, 0.0, 0.0], [0.0, 0.0, 0.0, 1.0], [0.0, 0.0, 1.0, 0.0], [1.0, 0.0, 0.0, 0.0]]
        .into_dyn();
    let y_pred = array![
        [0.1f32, 0.9, 0.05, 0.05],
        [0.1, 0.2, 0.0, 0.7],
        [0.0, 0.15, 0.8, 0.05],
        [1.0, 0.0, 0.0, 0.0]
    ]
    .into_dyn();
    let loss = l1_loss(&y_true, &y_pred).unwrap();
    let expected = [0.075f32, 0.15, 0.1, 0.0];
    assert_eq!(loss.shape(), &[4]);
    for (got, want) in loss.iter().zip(expected.iter()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-6);
    }
}

#[test]
fn test_l1_rank_one_is_elementwise() {
    let y_true = array![1.0f32, 3.0].into_dyn();
    let y_pred = array![2.0f32, 0.5].into_dyn();
    let loss = l1_loss(&y_true, &y_pred).unwrap();
    assert_eq!(loss, array![1.0f32, 2.5].into_dyn());
}

#[test]
fn test_l1_native_backend_returns_tensor() {
    let y_true = Tensor::new(vec![1.0, 3.0, 2.0, 0.0], vec![4, 1]).unwrap();
    let y_pred = Tensor::new(vec![2.0, 0.0, 2.0, 1.0], vec![4, 1]).unwrap();
    y_pred.set_requires_grad(true).unwrap();
    let loss: Tensor = l1_loss(&y_true, &y_pred).unwrap();
    assert_eq!(loss.shape(), vec![4]);
    assert_eq!(loss.to_array().unwrap(), array![1.0f32, 3.0, 0.0, 1.0].into_dyn());
}

#[test]
fn test_l1_rejects_scalars_and_mismatches() {
    assert!(matches!(
        l1_loss(&vec![1.0f32], &vec![2.0f32]),
        Err(FestimError::UnsupportedBackend { .. })
    ));
    let a = array![1.0f32, 2.0].into_dyn();
    let b = array![1.0f32, 2.0, 3.0].into_dyn();
    assert!(matches!(l1_loss(&a, &b), Err(FestimError::ShapeMismatch { .. })));
}
