use std::fmt;

use crate::config::FormatOptions;
use crate::types::datatype::SqlType;

/// A named, typed member of a STRUCT.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    name: String,
    ty: SqlType,
}

impl Field {
    pub fn of(name: impl Into<String>, ty: SqlType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &SqlType {
        &self.ty
    }

    pub fn format(&self, options: &FormatOptions) -> String {
        format!("{} {}", options.escape(&self.name), self.ty.format(options))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&FormatOptions::none()))
    }
}
