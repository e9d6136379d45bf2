use std::fmt;

use crate::types::field::Field;

/// Raised while a type is being constructed. No partially built type is ever
/// handed out when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    DuplicateField { existing: Field, conflicting: Field },

    InvalidDecimal { precision: u32, scale: u32 },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::DuplicateField {
                existing,
                conflicting,
            } => write!(
                f,
                "Duplicate field names found in STRUCT: '{}' and '{}'",
                existing, conflicting
            ),

            SchemaError::InvalidDecimal { precision, scale } if *precision < 1 => {
                write!(f, "DECIMAL precision must be >= 1: DECIMAL({precision}, {scale})")
            }

            SchemaError::InvalidDecimal { precision, scale } => write!(
                f,
                "DECIMAL scale must be between 0 and precision: DECIMAL({precision}, {scale})"
            ),
        }
    }
}

impl std::error::Error for SchemaError {}

/// Raised when a runtime value does not have the shape its declared type
/// requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    TypeMismatch { expected: String, actual: String },

    UnknownField { name: String },

    /// A failure inside an element of a container value.
    Nested {
        context: String,
        source: Box<DataError>,
    },
}

impl DataError {
    pub fn mismatch(expected: impl fmt::Display, actual: impl fmt::Display) -> Self {
        DataError::TypeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    pub fn nested(context: impl Into<String>, source: DataError) -> Self {
        DataError::Nested {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::TypeMismatch { expected, actual } => {
                write!(f, "Expected {}, got {}", expected, actual)
            }
            DataError::UnknownField { name } => write!(f, "Unknown field: {}", name),
            DataError::Nested { context, source } => write!(f, "{}: {}", context, source),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Nested { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
