use std::collections::{BTreeMap, HashMap};

use ndarray::ArrayD;

use crate::backend::{to_number, TensorLike};
use crate::error::FestimError;
use crate::tensor::Tensor;

/// A single entry of a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A plain numeric array.
    Array(ArrayD<f32>),
    /// A native backend tensor.
    Tensor(Tensor),
    /// A bare number (label, id, ...). Has no shape.
    Scalar(f64),
    /// Free text. Has no shape.
    Text(String),
}

impl Value {
    /// Shape of the value, or `None` for values that are not array-like.
    pub fn shape(&self) -> Option<Vec<usize>> {
        match self {
            Value::Array(a) => Some(a.shape().to_vec()),
            Value::Tensor(t) => Some(t.shape()),
            Value::Scalar(_) | Value::Text(_) => None,
        }
    }

    /// Converts the value to a plain array, detaching tensors as needed.
    pub fn to_array(&self) -> Result<ArrayD<f32>, FestimError> {
        match self {
            Value::Array(a) => Ok(a.clone()),
            Value::Tensor(t) => to_number(t),
            Value::Scalar(s) => to_number(s),
            Value::Text(_) => Err(FestimError::UnsupportedOperation(
                "text values cannot be converted to arrays".to_string(),
            )),
        }
    }

    pub fn as_array(&self) -> Option<&ArrayD<f32>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }
}

impl From<ArrayD<f32>> for Value {
    fn from(array: ArrayD<f32>) -> Self {
        Value::Array(array)
    }
}

impl From<Tensor> for Value {
    fn from(tensor: Tensor) -> Self {
        Value::Tensor(tensor)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

/// One sample (or one batch) keyed by name.
pub type Record = BTreeMap<String, Value>;

/// Items that expose a set of string keys.
pub trait KeyedItem {
    /// The keys of the item, sorted.
    fn key_set(&self) -> Vec<String>;
}

impl<V> KeyedItem for BTreeMap<String, V> {
    fn key_set(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }
}

impl<V> KeyedItem for HashMap<String, V> {
    fn key_set(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.keys().cloned().collect();
        keys.sort();
        keys
    }
}

/// Fetches `key` from `record`, failing with `KeyNotFound`.
pub fn get_value<'a>(record: &'a Record, key: &str) -> Result<&'a Value, FestimError> {
    record
        .get(key)
        .ok_or_else(|| FestimError::KeyNotFound(key.to_string()))
}
