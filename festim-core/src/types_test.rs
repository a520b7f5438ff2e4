use super::*;

#[test]
fn test_torch_aliases_resolve_to_same_dtype() {
    assert_eq!(DType::from_torch_name("float").unwrap(), DType::F32);
    assert_eq!(DType::from_torch_name("double").unwrap(), DType::F64);
    assert_eq!(DType::from_torch_name("half").unwrap(), DType::F16);
    assert_eq!(DType::from_torch_name("long").unwrap(), DType::I64);
    assert_eq!(DType::from_torch_name("short").unwrap(), DType::I16);
    assert_eq!(DType::from_torch_name("int").unwrap(), DType::I32);
}

#[test]
fn test_tf_only_dtypes() {
    assert_eq!(DType::from_tf_name("string").unwrap(), DType::String);
    assert_eq!(DType::from_tf_name("uint64").unwrap(), DType::U64);
    // Torch has no uint16
    assert!(matches!(
        DType::from_torch_name("uint16"),
        Err(FestimError::UnsupportedDType(_))
    ));
    // and TF has no aliases
    assert!(DType::from_tf_name("long").is_err());
}

#[test]
fn test_numpy_names() {
    assert_eq!(DType::from_torch_name("long").unwrap().numpy_name(), "int64");
    assert_eq!(DType::from_tf_name("float16").unwrap().numpy_name(), "float16");
    assert_eq!(DType::Bool.numpy_name(), "bool");
}

#[test]
fn test_kind_predicates() {
    assert!(DType::F16.is_floating_point());
    assert!(!DType::F16.is_integer());
    assert!(DType::U8.is_integer());
    assert!(!DType::Bool.is_integer());
    assert!(!DType::String.is_floating_point());
}
