use std::fmt;

use crate::config::FormatOptions;
use crate::types::SqlType;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnName(String);

impl ColumnName {
    pub fn of(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnName {
    fn from(value: &str) -> Self {
        Self::of(value)
    }
}

/// Whether a column belongs to the record's key or to its value payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Key,
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    name: ColumnName,
    ty: SqlType,
    namespace: Namespace,
    // position within its namespace
    index: usize,
}

impl Column {
    pub fn of(name: ColumnName, ty: SqlType, namespace: Namespace, index: usize) -> Self {
        Self {
            name,
            ty,
            namespace,
            index,
        }
    }

    pub fn name(&self) -> &ColumnName {
        &self.name
    }

    pub fn ty(&self) -> &SqlType {
        &self.ty
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_key(&self) -> bool {
        self.namespace == Namespace::Key
    }

    pub fn format(&self, options: &FormatOptions) -> String {
        let suffix = if self.is_key() { " KEY" } else { "" };
        format!(
            "{} {}{}",
            options.escape(self.name.text()),
            self.ty.format(options),
            suffix
        )
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&FormatOptions::none()))
    }
}
