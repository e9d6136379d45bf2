use std::fmt;

use crate::types::SchemaError;

/// Offsets are byte positions into the parsed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnexpectedEof {
        expected: String,
    },

    UnexpectedToken {
        expected: String,
        found: String,
        offset: usize,
    },

    UnexpectedChar {
        ch: char,
        offset: usize,
    },

    UnterminatedQuote {
        offset: usize,
    },

    InvalidNumber {
        literal: String,
        offset: usize,
    },

    UnknownType {
        name: String,
        offset: usize,
    },

    UnknownCommand {
        name: String,
    },

    TooDeep {
        limit: usize,
        offset: usize,
    },

    /// Syntactically fine but describes an invalid type.
    Invalid {
        source: SchemaError,
        offset: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input, expected {}", expected)
            }
            ParseError::UnexpectedToken {
                expected,
                found,
                offset,
            } => write!(f, "at {}: expected {}, found {}", offset, expected, found),
            ParseError::UnexpectedChar { ch, offset } => {
                write!(f, "at {}: unexpected character '{}'", offset, ch)
            }
            ParseError::UnterminatedQuote { offset } => {
                write!(f, "at {}: unterminated quoted identifier", offset)
            }
            ParseError::InvalidNumber { literal, offset } => {
                write!(f, "at {}: invalid number '{}'", offset, literal)
            }
            ParseError::UnknownType { name, offset } => {
                write!(f, "at {}: unknown type '{}'", offset, name)
            }
            ParseError::UnknownCommand { name } => {
                write!(f, "unknown command '{}', try 'help'", name)
            }
            ParseError::TooDeep { limit, offset } => {
                write!(f, "at {}: types nested more than {} levels deep", offset, limit)
            }
            ParseError::Invalid { source, offset } => write!(f, "at {}: {}", offset, source),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Invalid { source, .. } => Some(source),
            _ => None,
        }
    }
}
