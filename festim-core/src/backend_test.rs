use super::*;
use ndarray::array;

#[test]
fn test_backend_tags() {
    let t = Tensor::new(vec![1.0], vec![1]).unwrap();
    assert_eq!(TensorLike::backend(&t), Backend::Native);
    assert_eq!(array![1.0f32].into_dyn().backend(), Backend::NdArray);
    assert_eq!(4.0f64.backend(), Backend::Scalar);
    assert!(t.is_tensor());
    assert!(!3i64.is_tensor());
}

#[test]
fn test_to_number_scalars_are_wrapped() {
    let a = to_number(&4.0f32).unwrap();
    assert_eq!(a.ndim(), 0);
    assert_eq!(a.iter().next().copied(), Some(4.0));

    let v = to_number(&vec![1.0f32, 2.0, 3.0]).unwrap();
    assert_eq!(v, array![1.0f32, 2.0, 3.0].into_dyn());
}

#[test]
fn test_to_number_arrays_pass_through() {
    let arr = array![[1.0f32, 2.0], [3.0, 4.0]].into_dyn();
    assert_eq!(to_number(&arr).unwrap(), arr);
}

#[test]
fn test_to_number_detaches_tracked_tensors() {
    let t = Tensor::new(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
    t.set_requires_grad(true).unwrap();
    let arr = to_number(&t).unwrap();
    assert_eq!(arr, array![1.0f32, 2.0, 3.0].into_dyn());
    // conversion leaves the graph state of the source alone
    assert!(t.requires_grad());
}

#[test]
fn test_from_array_round_trips_backend() {
    let arr = array![1.0f32, 2.0].into_dyn();
    let t = <Tensor as FromArray>::from_array(arr.clone()).unwrap();
    assert_eq!(t.shape(), vec![2]);
    let back = <ArrayD<f32> as FromArray>::from_array(arr.clone()).unwrap();
    assert_eq!(back, arr);
}
