use std::fmt;

use crate::config::FormatOptions;
use crate::schema::column::{Column, ColumnName, Namespace};
use crate::types::SqlType;

/// Ordered key columns plus ordered value columns.
///
/// Column names are not required to be unique. A join result may legitimately
/// carry the same value-column name from both of its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogicalSchema {
    key: Vec<Column>,
    value: Vec<Column>,
}

impl LogicalSchema {
    pub fn builder() -> LogicalSchemaBuilder {
        LogicalSchemaBuilder::default()
    }

    pub fn key(&self) -> &[Column] {
        &self.key
    }

    pub fn value(&self) -> &[Column] {
        &self.value
    }

    /// Key columns first, then value columns.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.key.iter().chain(self.value.iter())
    }

    /// First column with this name, searching key columns before value columns.
    pub fn find_column(&self, name: &ColumnName) -> Option<&Column> {
        self.columns().find(|c| c.name() == name)
    }

    pub fn find_value_column(&self, name: &ColumnName) -> Option<&Column> {
        self.value.iter().find(|c| c.name() == name)
    }

    pub fn format(&self, options: &FormatOptions) -> String {
        self.columns()
            .map(|c| c.format(options))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for LogicalSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&FormatOptions::none()))
    }
}

/// Appends columns in call order.
#[derive(Debug, Default)]
pub struct LogicalSchemaBuilder {
    key: Vec<Column>,
    value: Vec<Column>,
}

impl LogicalSchemaBuilder {
    pub fn key_column(mut self, name: ColumnName, ty: SqlType) -> Self {
        let index = self.key.len();
        self.key.push(Column::of(name, ty, Namespace::Key, index));
        self
    }

    pub fn value_column(mut self, name: ColumnName, ty: SqlType) -> Self {
        let index = self.value.len();
        self.value.push(Column::of(name, ty, Namespace::Value, index));
        self
    }

    /// Re-adds each column as a key column; incoming indexes are discarded.
    pub fn key_columns<'a, I>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = &'a Column>,
    {
        columns.into_iter().fold(self, |b, c| {
            b.key_column(c.name().clone(), c.ty().clone())
        })
    }

    /// Re-adds each column as a value column; incoming indexes are discarded.
    pub fn value_columns<'a, I>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = &'a Column>,
    {
        columns.into_iter().fold(self, |b, c| {
            b.value_column(c.name().clone(), c.ty().clone())
        })
    }

    pub fn build(self) -> LogicalSchema {
        LogicalSchema {
            key: self.key,
            value: self.value,
        }
    }
}
