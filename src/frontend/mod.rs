pub mod command;
pub mod errors;
pub mod lexer;
pub mod parser;

mod unit_tests;

pub use command::{Command, Reply};
pub use errors::ParseError;
pub use parser::{parse_schema, parse_type};
