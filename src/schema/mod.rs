//! Record schemas: ordered key columns followed by ordered value columns.

pub mod column;
pub mod logical;


pub use column::{Column, ColumnName, Namespace};
pub use logical::{LogicalSchema, LogicalSchemaBuilder};
