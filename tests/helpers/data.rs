#![allow(dead_code)]

use streamsql_types::schema::{ColumnName, LogicalSchema};
use streamsql_types::types::SqlType;

pub fn col(name: &str) -> ColumnName {
    ColumnName::of(name)
}

pub fn left_schema() -> LogicalSchema {
    LogicalSchema::builder()
        .key_column(col("LK"), SqlType::String)
        .value_column(col("BLUE"), SqlType::String)
        .value_column(col("GREEN"), SqlType::Integer)
        .build()
}

pub fn right_schema() -> LogicalSchema {
    LogicalSchema::builder()
        .key_column(col("RK"), SqlType::String)
        .value_column(col("RED"), SqlType::Bigint)
        .value_column(col("ORANGE"), SqlType::Double)
        .build()
}

/// Builds a schema from `(name, type, is_key)` triples.
pub fn schema_of(columns: &[(&str, SqlType, bool)]) -> LogicalSchema {
    columns
        .iter()
        .fold(LogicalSchema::builder(), |b, (name, ty, is_key)| {
            if *is_key {
                b.key_column(col(name), ty.clone())
            } else {
                b.value_column(col(name), ty.clone())
            }
        })
        .build()
}
