//! The closed set of SQL type categories.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SqlBaseType {
    Boolean,
    Integer,
    Bigint,
    Decimal,
    Double,
    String,
    Array,
    Map,
    Struct,
}

impl SqlBaseType {
    pub fn name(&self) -> &'static str {
        match self {
            SqlBaseType::Boolean => "BOOLEAN",
            SqlBaseType::Integer => "INTEGER",
            SqlBaseType::Bigint => "BIGINT",
            SqlBaseType::Decimal => "DECIMAL",
            SqlBaseType::Double => "DOUBLE",
            SqlBaseType::String => "STRING",
            SqlBaseType::Array => "ARRAY",
            SqlBaseType::Map => "MAP",
            SqlBaseType::Struct => "STRUCT",
        }
    }
}

impl fmt::Display for SqlBaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
