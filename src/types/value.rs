//! Runtime values flowing through a query.
//!
//! SQL NULL is modelled as `Option::None` wherever a value may be absent.

use std::fmt;

use crate::types::classifier::{NativeClassifier, TypeClassifier};
use crate::types::errors::DataError;
use crate::types::sql_struct::SqlStruct;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Integer(i32),
    Bigint(i64),
    Double(f64),
    Decimal(DecimalValue),
    String(String),
    Array(Vec<Option<Value>>),
    Map(Vec<(Option<Value>, Option<Value>)>),
    Struct(StructValue),
}

impl Value {
    pub fn as_struct(&self) -> Option<&StructValue> {
        match self {
            Value::Struct(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Bigint(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
            Value::Array(items) => {
                let items: Vec<String> = items.iter().map(display_opt).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Value::Map(entries) => {
                let entries: Vec<String> = entries
                    .iter()
                    .map(|(k, v)| format!("{}={}", display_opt(k), display_opt(v)))
                    .collect();
                write!(f, "{{{}}}", entries.join(", "))
            }
            Value::Struct(s) => write!(f, "{s}"),
        }
    }
}

fn display_opt(value: &Option<Value>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "NULL".to_string())
}

/// An exact decimal: `unscaled * 10^-scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalValue {
    unscaled: i128,
    scale: u32,
}

impl DecimalValue {
    pub fn new(unscaled: i128, scale: u32) -> Self {
        Self { unscaled, scale }
    }

    pub fn unscaled(&self) -> i128 {
        self.unscaled
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Number of digits in the unscaled value; zero has precision 1.
    pub fn precision(&self) -> u32 {
        let mut n = self.unscaled.unsigned_abs();
        let mut digits = 1;
        while n >= 10 {
            n /= 10;
            digits += 1;
        }
        digits
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.unscaled < 0 { "-" } else { "" };
        let digits = self.unscaled.unsigned_abs().to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }

        let digits = format!("{digits:0>width$}", width = scale + 1);
        let (int_part, frac_part) = digits.split_at(digits.len() - scale);
        write!(f, "{sign}{int_part}.{frac_part}")
    }
}

/// A STRUCT value that carries its own schema.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
    schema: SqlStruct,
    values: Vec<Option<Value>>,
}

impl StructValue {
    /// Starts with every field NULL.
    pub fn builder(schema: SqlStruct) -> StructValueBuilder {
        let values = vec![None; schema.len()];
        StructValueBuilder { schema, values }
    }

    pub fn schema(&self) -> &SqlStruct {
        &self.schema
    }

    pub fn get(&self, name: &str) -> Result<Option<&Value>, DataError> {
        let idx = self
            .schema
            .field_index(name)
            .ok_or_else(|| DataError::UnknownField {
                name: name.to_string(),
            })?;
        Ok(self.values[idx].as_ref())
    }
}

impl fmt::Display for StructValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .schema
            .fields()
            .iter()
            .zip(&self.values)
            .map(|(field, value)| format!("{}={}", field.name(), display_opt(value)))
            .collect();
        write!(f, "Struct{{{}}}", parts.join(","))
    }
}

#[derive(Debug)]
pub struct StructValueBuilder {
    schema: SqlStruct,
    values: Vec<Option<Value>>,
}

impl StructValueBuilder {
    /// Sets a field after checking the value against the field's type,
    /// classifying values by their own variant.
    pub fn set(self, name: &str, value: Option<Value>) -> Result<Self, DataError> {
        self.set_with(name, value, &NativeClassifier)
    }

    /// Like [`set`](Self::set), with `classifier` naming the kind of a value
    /// that fails validation.
    pub fn set_with(
        mut self,
        name: &str,
        value: Option<Value>,
        classifier: &dyn TypeClassifier,
    ) -> Result<Self, DataError> {
        let idx = self
            .schema
            .field_index(name)
            .ok_or_else(|| DataError::UnknownField {
                name: name.to_string(),
            })?;

        self.schema.fields()[idx]
            .ty()
            .validate_value_with(value.as_ref(), classifier)
            .map_err(|e| DataError::nested(format!("STRUCT field '{name}'"), e))?;

        self.values[idx] = value;
        Ok(self)
    }

    pub fn build(self) -> StructValue {
        StructValue {
            schema: self.schema,
            values: self.values,
        }
    }
}
