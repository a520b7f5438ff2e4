use super::*;
use ndarray::array;

#[test]
fn test_new_checks_length() {
    let result = Tensor::new(vec![1.0, 2.0, 3.0], vec![2, 2]);
    assert_eq!(
        result.err(),
        Some(FestimError::TensorCreation { data_len: 3, shape: vec![2, 2] })
    );
}

#[test]
fn test_to_array_preserves_shape_and_values() {
    let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
    let arr = t.to_array().unwrap();
    assert_eq!(arr, array![[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]].into_dyn());
}

#[test]
fn test_to_array_casts_other_dtypes() {
    let t = Tensor::new_i64(vec![3, 1], vec![2]).unwrap();
    assert_eq!(t.dtype(), DType::I64);
    assert_eq!(t.to_array().unwrap(), array![3.0f32, 1.0].into_dyn());

    let t = Tensor::new_f64(vec![0.5], vec![]).unwrap();
    assert_eq!(t.to_array().unwrap().shape(), &[] as &[usize]);
}

#[test]
fn test_requires_grad_blocks_conversion_until_detached() {
    let t = Tensor::new(vec![1.0, 2.0], vec![2]).unwrap();
    t.set_requires_grad(true).unwrap();
    assert!(t.to_array().is_err());

    let d = t.detach();
    assert!(!d.requires_grad());
    assert!(t.requires_grad(), "detach must not touch the original");
    assert_eq!(d.to_array().unwrap(), array![1.0f32, 2.0].into_dyn());
}

#[test]
fn test_detach_shares_buffer() {
    let t = Tensor::new(vec![1.0, 2.0], vec![2]).unwrap();
    let d = t.detach();
    assert!(Arc::ptr_eq(t.read_data().buffer(), d.read_data().buffer()));
}

#[test]
fn test_integer_tensor_cannot_require_grad() {
    let t = Tensor::new_i64(vec![1], vec![1]).unwrap();
    assert!(matches!(
        t.set_requires_grad(true),
        Err(FestimError::UnsupportedOperation(_))
    ));
}

#[test]
fn test_set_grad_checks_shape() {
    let t = Tensor::new(vec![1.0, 2.0], vec![2]).unwrap();
    t.set_requires_grad(true).unwrap();
    let bad = Tensor::new(vec![1.0], vec![1]).unwrap();
    assert!(matches!(t.set_grad(Some(bad)), Err(FestimError::ShapeMismatch { .. })));

    let good = Tensor::new(vec![0.1, 0.2], vec![2]).unwrap();
    t.set_grad(Some(good.clone())).unwrap();
    assert_eq!(t.grad(), Some(good));
    assert!(t.detach().grad().is_none());
}

#[test]
fn test_permute_moves_channels_last() {
    // (C=2, H=1, W=2)
    let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 1, 2]).unwrap();
    let p = t.permute(&[1, 2, 0]).unwrap();
    assert_eq!(p.shape(), vec![1, 2, 2]);
    assert_eq!(
        p.to_array().unwrap(),
        array![[[1.0f32, 3.0], [2.0, 4.0]]].into_dyn()
    );
    assert!(t.permute(&[0, 0, 1]).is_err());
}
