use crate::error::FestimError;

/// Defines the possible data types for tensor and array elements.
///
/// Names coming from the different backend conventions (`"long"`, `"half"`,
/// `"string"`, ...) are resolved with [`DType::from_torch_name`] and
/// [`DType::from_tf_name`], and [`DType::numpy_name`] gives the canonical
/// plain-array name used once data has been converted with `to_number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 16-bit floating-point type.
    F16,
    /// 32-bit floating-point type.
    F32,
    /// 64-bit floating-point type.
    F64,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    /// Boolean type (true/false values).
    Bool,
    /// Variable length byte strings. Only the TF-style naming knows this one.
    String,
}

impl DType {
    /// Resolves a Torch-style dtype name, including its aliases
    /// (`float`, `double`, `half`, `short`, `int`, `long`).
    pub fn from_torch_name(name: &str) -> Result<Self, FestimError> {
        match name {
            "float32" | "float" => Ok(DType::F32),
            "float64" | "double" => Ok(DType::F64),
            "float16" | "half" => Ok(DType::F16),
            "uint8" => Ok(DType::U8),
            "int8" => Ok(DType::I8),
            "int16" | "short" => Ok(DType::I16),
            "int32" | "int" => Ok(DType::I32),
            "int64" | "long" => Ok(DType::I64),
            "bool" => Ok(DType::Bool),
            _ => Err(FestimError::UnsupportedDType(format!("torch dtype '{}'", name))),
        }
    }

    /// Resolves a TF-style dtype name. Unlike the Torch table this one has
    /// unsigned wide integers and strings, but no aliases.
    pub fn from_tf_name(name: &str) -> Result<Self, FestimError> {
        match name {
            "string" => Ok(DType::String),
            "int8" => Ok(DType::I8),
            "uint8" => Ok(DType::U8),
            "int16" => Ok(DType::I16),
            "uint16" => Ok(DType::U16),
            "int32" => Ok(DType::I32),
            "uint32" => Ok(DType::U32),
            "int64" => Ok(DType::I64),
            "uint64" => Ok(DType::U64),
            "float16" => Ok(DType::F16),
            "float32" => Ok(DType::F32),
            "float64" => Ok(DType::F64),
            _ => Err(FestimError::UnsupportedDType(format!("tf dtype '{}'", name))),
        }
    }

    /// Canonical plain-array name of the dtype.
    pub fn numpy_name(&self) -> &'static str {
        match self {
            DType::F16 => "float16",
            DType::F32 => "float32",
            DType::F64 => "float64",
            DType::U8 => "uint8",
            DType::U16 => "uint16",
            DType::U32 => "uint32",
            DType::U64 => "uint64",
            DType::I8 => "int8",
            DType::I16 => "int16",
            DType::I32 => "int32",
            DType::I64 => "int64",
            DType::Bool => "bool",
            DType::String => "object",
        }
    }

    pub fn is_floating_point(&self) -> bool {
        matches!(self, DType::F16 | DType::F32 | DType::F64)
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            DType::U8
                | DType::U16
                | DType::U32
                | DType::U64
                | DType::I8
                | DType::I16
                | DType::I32
                | DType::I64
        )
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
