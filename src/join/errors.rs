use std::fmt;

use crate::types::SqlType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinSide {
    Left,
    Right,
}

impl fmt::Display for JoinSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinSide::Left => write!(f, "Left"),
            JoinSide::Right => write!(f, "Right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// The join sources are keyed by different types. This is a problem
    /// with the user's query.
    KeyTypeMismatch { left: SqlType, right: SqlType },

    /// A source does not have exactly one key column.
    KeyCount { side: JoinSide, count: usize },
}

impl JoinError {
    pub fn is_user_error(&self) -> bool {
        matches!(self, JoinError::KeyTypeMismatch { .. })
    }
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinError::KeyTypeMismatch { left, right } => {
                write!(f, "Invalid join. Key types differ: {} vs {}", left, right)
            }
            JoinError::KeyCount { side, count } => write!(
                f,
                "Invalid join. {} source must have exactly one key column, found {}",
                side, count
            ),
        }
    }
}

impl std::error::Error for JoinError {}
