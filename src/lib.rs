//! Type and schema layer of a streaming SQL engine.
//!
//! - [`types`]: SQL types, STRUCT construction and runtime value validation
//! - [`schema`]: key/value column schemas of streams and tables
//! - [`join`]: output schema of a join between two sources
//! - [`frontend`]: parsing of type and schema text, shell commands

pub mod config;
pub mod debugger;
pub mod error;

pub mod frontend;
pub mod join;
pub mod schema;
pub mod types;

pub use error::{Error, Result};
