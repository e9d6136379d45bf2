//! The SQL type model.
//!
//! Finished types are immutable values and are safe to share across threads.
//! Only builders are mutable, and they are consumed when built.

pub mod base_type;
pub mod classifier;
pub mod datatype;
pub mod errors;
pub mod field;
pub mod sql_struct;
pub mod value;


pub use base_type::SqlBaseType;
pub use classifier::{NativeClassifier, TypeClassifier};
pub use datatype::{SqlDecimal, SqlType};
pub use errors::{DataError, SchemaError};
pub use field::Field;
pub use sql_struct::{SqlStruct, SqlStructBuilder};
pub use value::{DecimalValue, StructValue, StructValueBuilder, Value};
