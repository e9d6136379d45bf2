//! Maps runtime values to the base type they represent.

use crate::types::base_type::SqlBaseType;
use crate::types::value::Value;

/// Names the SQL category of a runtime value. Validation uses it to describe
/// what it actually received when a value has the wrong shape.
pub trait TypeClassifier {
    fn classify(&self, value: &Value) -> SqlBaseType;
}

/// Classifies by the value's own variant.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeClassifier;

impl TypeClassifier for NativeClassifier {
    fn classify(&self, value: &Value) -> SqlBaseType {
        match value {
            Value::Boolean(_) => SqlBaseType::Boolean,
            Value::Integer(_) => SqlBaseType::Integer,
            Value::Bigint(_) => SqlBaseType::Bigint,
            Value::Double(_) => SqlBaseType::Double,
            Value::Decimal(_) => SqlBaseType::Decimal,
            Value::String(_) => SqlBaseType::String,
            Value::Array(_) => SqlBaseType::Array,
            Value::Map(_) => SqlBaseType::Map,
            Value::Struct(_) => SqlBaseType::Struct,
        }
    }
}

impl<F> TypeClassifier for F
where
    F: Fn(&Value) -> SqlBaseType,
{
    fn classify(&self, value: &Value) -> SqlBaseType {
        self(value)
    }
}
