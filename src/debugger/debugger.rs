//! Process-wide leveled logging to stderr.
//!
//! The level lives in an atomic so any thread may read it without locking.
//! Indentation for scoped output is tracked per thread.

use std::cell::Cell;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl DebugLevel {
    /// Numeric levels above `Trace` saturate to `Trace`.
    pub fn from_u8(level: u8) -> Self {
        match level {
            0 => DebugLevel::Off,
            1 => DebugLevel::Error,
            2 => DebugLevel::Warn,
            3 => DebugLevel::Info,
            4 => DebugLevel::Debug,
            _ => DebugLevel::Trace,
        }
    }

    /// Accepts a level name (any case) or its number.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return Some(Self::from_u8(n));
        }

        match s.to_uppercase().as_str() {
            "OFF" => Some(DebugLevel::Off),
            "ERROR" => Some(DebugLevel::Error),
            "WARN" => Some(DebugLevel::Warn),
            "INFO" => Some(DebugLevel::Info),
            "DEBUG" => Some(DebugLevel::Debug),
            "TRACE" => Some(DebugLevel::Trace),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DebugLevel::Off => "",
            DebugLevel::Error => "ERROR",
            DebugLevel::Warn => "WARN",
            DebugLevel::Info => "INFO",
            DebugLevel::Debug => "DEBUG",
            DebugLevel::Trace => "TRACE",
        }
    }
}

/// Area of the crate a log line comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Component {
    Types,
    Struct,
    Schema,
    Join,
    Parser,
    Shell,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Types => "types",
            Component::Struct => "struct",
            Component::Schema => "schema",
            Component::Join => "join",
            Component::Parser => "parser",
            Component::Shell => "shell",
        };
        write!(f, "{name}")
    }
}

pub static DEBUG_LEVEL: AtomicU8 = AtomicU8::new(DebugLevel::Off as u8);

thread_local! {
    static INDENT: Cell<usize> = const { Cell::new(0) };
}

pub fn set_debug_level(level: DebugLevel) {
    DEBUG_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn get_debug_level() -> DebugLevel {
    DebugLevel::from_u8(DEBUG_LEVEL.load(Ordering::Relaxed))
}

#[inline]
pub fn should_log(level: DebugLevel) -> bool {
    level != DebugLevel::Off && level as u8 <= DEBUG_LEVEL.load(Ordering::Relaxed)
}

pub fn indent() {
    INDENT.with(|depth| depth.set(depth.get() + 1));
}

pub fn dedent() {
    INDENT.with(|depth| depth.set(depth.get().saturating_sub(1)));
}

pub fn format_indent() -> String {
    INDENT.with(|depth| "  ".repeat(depth.get()))
}

/// The colored label printed in front of a log line.
pub fn level_tag(level: DebugLevel) -> String {
    use color::*;

    let color = match level {
        DebugLevel::Off => return String::new(),
        DebugLevel::Error => RED,
        DebugLevel::Warn => YELLOW,
        DebugLevel::Info => GREEN,
        DebugLevel::Debug => BLUE,
        DebugLevel::Trace => GRAY,
    };
    format!("{}{}{}", color, level.label(), RESET)
}

pub mod color {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GREEN: &str = "\x1b[32m";
    pub const BLUE: &str = "\x1b[34m";
    pub const GRAY: &str = "\x1b[90m";
    pub const RESET: &str = "\x1b[0m";
}
