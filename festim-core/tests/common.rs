use festim_core::{Record, Value};
use ndarray::{ArrayD, IxDyn};

// Shared across integration test files; not every file uses every helper.
#[allow(dead_code)]
pub fn record(pairs: Vec<(&str, Value)>) -> Record {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

#[allow(dead_code)]
pub fn filled(shape: &[usize], value: f32) -> Value {
    Value::Array(ArrayD::from_elem(IxDyn(shape), value))
}
