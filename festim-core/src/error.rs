use thiserror::Error;

/// Broad family an error belongs to.
///
/// Callers that only need to know *what kind* of failure happened (bad
/// arguments, bad shapes, a missing key, a bad environment) can match on this
/// instead of on every individual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Bad constructor or call arguments.
    Configuration,
    /// Rank or shape disagreements between arrays.
    Shape,
    /// A key, label or index that does not exist.
    Lookup,
    /// Malformed process environment or conflicting process-wide settings.
    Environment,
    /// The operation is not available for the given backend, dtype or value.
    Unsupported,
}

/// Custom error type for the festim framework.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum FestimError {
    #[error("At least {required} sources are required, got {actual}")]
    TooFewSources { required: usize, actual: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Rank mismatch for key '{key}': found ranks {ranks:?}")]
    RankMismatch { key: String, ranks: Vec<usize> },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Invalid batch size: found sizes {sizes:?}")]
    BatchSizeMismatch { sizes: Vec<usize> },

    #[error("Cannot pad shape {shape:?} to smaller target {target:?}")]
    PaddingTargetTooSmall { shape: Vec<usize>, target: Vec<usize> },

    #[error("Cannot concatenate an empty list of arrays")]
    EmptyArrayList,

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds { index: Vec<usize>, shape: Vec<usize> },

    #[error("Key '{0}' not found")]
    KeyNotFound(String),

    #[error("Key mismatch: expected keys {expected:?}, got {actual:?}")]
    KeyMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Label value {0} has no entry in the label mapping")]
    LabelNotMapped(String),

    #[error("Environment variable {name} must be an integer, but was set to '{value}'")]
    EnvParse { name: String, value: String },

    #[error("Tried to enforce a cpu limit of {requested}, but {existing} was already set")]
    ThreadLimitConflict { requested: usize, existing: usize },

    #[error("At least 1 core is required for training, but found {0}")]
    NoCores(i64),

    #[error("Unsupported backend for operation {operation}: {backend}")]
    UnsupportedBackend { backend: String, operation: String },

    #[error("Unsupported dtype: {0}")]
    UnsupportedDType(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreation { data_len: usize, shape: Vec<usize> },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FestimError {
    /// Maps the error onto its [`ErrorCategory`].
    pub fn category(&self) -> ErrorCategory {
        use FestimError::*;
        match self {
            TooFewSources { .. } | InvalidArgument(_) => ErrorCategory::Configuration,
            RankMismatch { .. }
            | ShapeMismatch { .. }
            | BatchSizeMismatch { .. }
            | PaddingTargetTooSmall { .. }
            | EmptyArrayList => ErrorCategory::Shape,
            IndexOutOfBounds { .. } | KeyNotFound(_) | KeyMismatch { .. } | LabelNotMapped(_) => {
                ErrorCategory::Lookup
            }
            EnvParse { .. } | ThreadLimitConflict { .. } | NoCores(_) => ErrorCategory::Environment,
            UnsupportedBackend { .. }
            | UnsupportedDType(_)
            | UnsupportedOperation(_)
            | TensorCreation { .. }
            | Internal(_) => ErrorCategory::Unsupported,
        }
    }
}

impl From<ndarray::ShapeError> for FestimError {
    fn from(err: ndarray::ShapeError) -> Self {
        FestimError::Internal(format!("ndarray shape error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            FestimError::TooFewSources { required: 2, actual: 1 }.category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            FestimError::BatchSizeMismatch { sizes: vec![4, 5] }.category(),
            ErrorCategory::Shape
        );
        assert_eq!(FestimError::LabelNotMapped("7".into()).category(), ErrorCategory::Lookup);
        assert_eq!(
            FestimError::ThreadLimitConflict { requested: 4, existing: 2 }.category(),
            ErrorCategory::Environment
        );
    }

    #[test]
    fn test_display_mentions_limits() {
        let err = FestimError::ThreadLimitConflict { requested: 4, existing: 2 };
        assert_eq!(
            err.to_string(),
            "Tried to enforce a cpu limit of 4, but 2 was already set"
        );
    }
}
