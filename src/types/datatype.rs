//! Logical SQL types.
//!
//! Every type is a plain value: equality and hashing are structural, so two
//! independently built descriptions of the same type compare equal.

use std::fmt;

use crate::config::FormatOptions;
use crate::debugger::Component;
use crate::schema_trace;
use crate::types::base_type::SqlBaseType;
use crate::types::classifier::{NativeClassifier, TypeClassifier};
use crate::types::errors::{DataError, SchemaError};
use crate::types::sql_struct::SqlStruct;
use crate::types::value::Value;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SqlType {
    Boolean,
    Integer,
    Bigint,
    Double,
    String,
    Decimal(SqlDecimal),
    Array(Box<SqlType>),
    Map(Box<SqlType>, Box<SqlType>),
    Struct(SqlStruct),
}

/// Precision and scale of a DECIMAL. Only constructible in valid form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SqlDecimal {
    precision: u32,
    scale: u32,
}

impl SqlDecimal {
    pub fn of(precision: u32, scale: u32) -> Result<Self, SchemaError> {
        if precision < 1 || scale > precision {
            return Err(SchemaError::InvalidDecimal { precision, scale });
        }
        Ok(Self { precision, scale })
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }
}

impl fmt::Display for SqlDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DECIMAL({}, {})", self.precision, self.scale)
    }
}

impl SqlType {
    pub fn decimal(precision: u32, scale: u32) -> Result<Self, SchemaError> {
        SqlDecimal::of(precision, scale).map(SqlType::Decimal)
    }

    pub fn array(item: SqlType) -> Self {
        SqlType::Array(Box::new(item))
    }

    pub fn map(key: SqlType, value: SqlType) -> Self {
        SqlType::Map(Box::new(key), Box::new(value))
    }

    pub fn base_type(&self) -> SqlBaseType {
        match self {
            SqlType::Boolean => SqlBaseType::Boolean,
            SqlType::Integer => SqlBaseType::Integer,
            SqlType::Bigint => SqlBaseType::Bigint,
            SqlType::Double => SqlBaseType::Double,
            SqlType::String => SqlBaseType::String,
            SqlType::Decimal(_) => SqlBaseType::Decimal,
            SqlType::Array(_) => SqlBaseType::Array,
            SqlType::Map(..) => SqlBaseType::Map,
            SqlType::Struct(_) => SqlBaseType::Struct,
        }
    }

    pub fn as_struct(&self) -> Option<&SqlStruct> {
        match self {
            SqlType::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Renders the type in DDL form, quoting field names as `options` asks.
    pub fn format(&self, options: &FormatOptions) -> String {
        match self {
            SqlType::Decimal(d) => d.to_string(),
            SqlType::Array(item) => format!("ARRAY<{}>", item.format(options)),
            SqlType::Map(key, value) => {
                format!("MAP<{}, {}>", key.format(options), value.format(options))
            }
            SqlType::Struct(s) => s.format(options),
            primitive => primitive.base_type().name().to_string(),
        }
    }

    /// Checks that `value` has the runtime shape of this type. `None` (SQL
    /// NULL) is valid for every type.
    pub fn validate_value(&self, value: Option<&Value>) -> Result<(), DataError> {
        self.validate_value_with(value, &NativeClassifier)
    }

    /// Like [`SqlType::validate_value`], naming mismatched values with the
    /// given classifier.
    pub fn validate_value_with(
        &self,
        value: Option<&Value>,
        classifier: &dyn TypeClassifier,
    ) -> Result<(), DataError> {
        let Some(value) = value else {
            return Ok(());
        };

        let result = match self {
            SqlType::Decimal(decimal) => validate_decimal(decimal, value, classifier),
            SqlType::Array(item) => validate_array(item, value, classifier),
            SqlType::Map(key, val) => validate_map(key, val, value, classifier),
            SqlType::Struct(s) => s.validate_value(value, classifier),
            primitive => {
                let actual = classifier.classify(value);
                if actual == primitive.base_type() {
                    Ok(())
                } else {
                    Err(DataError::mismatch(primitive.base_type(), actual))
                }
            }
        };

        if let Err(e) = &result {
            schema_trace!(Component::Types, "value rejected by {}: {}", self, e);
        }
        result
    }
}

fn validate_decimal(
    decimal: &SqlDecimal,
    value: &Value,
    classifier: &dyn TypeClassifier,
) -> Result<(), DataError> {
    let Value::Decimal(actual) = value else {
        return Err(DataError::mismatch(
            SqlBaseType::Decimal,
            classifier.classify(value),
        ));
    };

    if actual.precision() != decimal.precision() {
        return Err(DataError::mismatch(
            decimal,
            format!("precision {}", actual.precision()),
        ));
    }

    if actual.scale() != decimal.scale() {
        return Err(DataError::mismatch(
            decimal,
            format!("scale {}", actual.scale()),
        ));
    }

    Ok(())
}

fn validate_array(
    item: &SqlType,
    value: &Value,
    classifier: &dyn TypeClassifier,
) -> Result<(), DataError> {
    let Value::Array(elements) = value else {
        return Err(DataError::mismatch(
            SqlBaseType::Array,
            classifier.classify(value),
        ));
    };

    for (idx, element) in elements.iter().enumerate() {
        item.validate_value_with(element.as_ref(), classifier)
            .map_err(|e| DataError::nested(format!("ARRAY element {}", idx + 1), e))?;
    }

    Ok(())
}

fn validate_map(
    key_type: &SqlType,
    value_type: &SqlType,
    value: &Value,
    classifier: &dyn TypeClassifier,
) -> Result<(), DataError> {
    let Value::Map(entries) = value else {
        return Err(DataError::mismatch(
            SqlBaseType::Map,
            classifier.classify(value),
        ));
    };

    for (key, val) in entries {
        key_type
            .validate_value_with(key.as_ref(), classifier)
            .map_err(|e| DataError::nested("MAP key", e))?;

        value_type
            .validate_value_with(val.as_ref(), classifier)
            .map_err(|e| {
                let key = key
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "NULL".to_string());
                DataError::nested(format!("MAP value for key '{key}'"), e)
            })?;
    }

    Ok(())
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&FormatOptions::none()))
    }
}
