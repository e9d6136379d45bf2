use std::fmt;

use crate::frontend::errors::ParseError;
use crate::join::JoinError;
use crate::types::{DataError, SchemaError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Schema(SchemaError),
    Data(DataError),
    Join(JoinError),
    Parse(ParseError),
}

impl Error {
    /// True when the error stems from the caller's query or data rather than
    /// from a broken invariant in whoever built the types.
    pub fn is_user_error(&self) -> bool {
        match self {
            Error::Schema(_) => false,
            Error::Data(_) => true,
            Error::Join(e) => e.is_user_error(),
            Error::Parse(_) => true,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Schema(e) => write!(f, "schema error: {e}"),
            Error::Data(e) => write!(f, "data error: {e}"),
            Error::Join(e) => write!(f, "join error: {e}"),
            Error::Parse(e) => write!(f, "parse error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Schema(e) => Some(e),
            Error::Data(e) => Some(e),
            Error::Join(e) => Some(e),
            Error::Parse(e) => Some(e),
        }
    }
}

impl From<SchemaError> for Error {
    fn from(e: SchemaError) -> Self {
        Error::Schema(e)
    }
}

impl From<DataError> for Error {
    fn from(e: DataError) -> Self {
        Error::Data(e)
    }
}

impl From<JoinError> for Error {
    fn from(e: JoinError) -> Self {
        Error::Join(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}
