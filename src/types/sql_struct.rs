//! The STRUCT type: an ordered list of uniquely named fields.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config::FormatOptions;
use crate::debugger::Component;
use crate::types::base_type::SqlBaseType;
use crate::types::classifier::TypeClassifier;
use crate::types::datatype::SqlType;
use crate::types::errors::{DataError, SchemaError};
use crate::types::field::Field;
use crate::types::value::Value;
use crate::{schema_debug, schema_trace};

const PREFIX: &str = "STRUCT<";
const POSTFIX: &str = ">";
const EMPTY_STRUCT: &str = "STRUCT< >";

/// Immutable once built. Obtain one through [`SqlStruct::builder`].
///
/// Equality and hashing look only at the ordered field list, so two structs
/// built independently from the same fields are interchangeable. Field order
/// is significant.
#[derive(Clone)]
pub struct SqlStruct {
    fields: Vec<Field>,
    // name -> position in `fields`
    by_name: HashMap<String, usize>,
}

impl SqlStruct {
    pub fn builder() -> SqlStructBuilder {
        SqlStructBuilder::default()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a field by exact name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.by_name.get(name).map(|&idx| &self.fields[idx])
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn format(&self, options: &FormatOptions) -> String {
        if self.fields.is_empty() {
            return EMPTY_STRUCT.to_string();
        }

        let body = self
            .fields
            .iter()
            .map(|f| f.format(options))
            .collect::<Vec<_>>()
            .join(", ");

        format!("{PREFIX}{body}{POSTFIX}")
    }

    pub(crate) fn validate_value(
        &self,
        value: &Value,
        classifier: &dyn TypeClassifier,
    ) -> Result<(), DataError> {
        let Some(record) = value.as_struct() else {
            let actual = classifier.classify(value);
            return Err(DataError::mismatch(SqlBaseType::Struct, actual));
        };

        if record.schema() != self {
            return Err(DataError::mismatch(self, record.schema()));
        }

        Ok(())
    }
}

impl PartialEq for SqlStruct {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Eq for SqlStruct {}

impl Hash for SqlStruct {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fields.hash(state);
    }
}

impl fmt::Debug for SqlStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlStruct")
            .field("fields", &self.fields)
            .finish()
    }
}

impl fmt::Display for SqlStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&FormatOptions::none()))
    }
}

impl From<SqlStruct> for SqlType {
    fn from(value: SqlStruct) -> Self {
        SqlType::Struct(value)
    }
}

/// Accumulates fields for a [`SqlStruct`].
///
/// Each method consumes the builder and hands it back, so a builder that has
/// been built, or that rejected a field, can no longer be used.
#[derive(Debug, Default)]
pub struct SqlStructBuilder {
    fields: Vec<Field>,
    by_name: HashMap<String, usize>,
}

impl SqlStructBuilder {
    pub fn field(self, name: impl Into<String>, ty: SqlType) -> Result<Self, SchemaError> {
        self.add_field(Field::of(name, ty))
    }

    /// Fails straight away if a field with the same name was already added.
    pub fn add_field(mut self, field: Field) -> Result<Self, SchemaError> {
        if let Some(&idx) = self.by_name.get(field.name()) {
            let existing = self.fields[idx].clone();
            schema_debug!(
                Component::Struct,
                "rejecting duplicate field '{}' (already have '{}')",
                field,
                existing
            );
            return Err(SchemaError::DuplicateField {
                existing,
                conflicting: field,
            });
        }

        self.by_name.insert(field.name().to_string(), self.fields.len());
        self.fields.push(field);
        Ok(self)
    }

    pub fn fields<I>(self, fields: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = Field>,
    {
        fields.into_iter().try_fold(self, Self::add_field)
    }

    pub fn build(self) -> SqlStruct {
        schema_trace!(
            Component::Struct,
            "built STRUCT with {} field(s)",
            self.fields.len()
        );

        SqlStruct {
            fields: self.fields,
            by_name: self.by_name,
        }
    }
}
