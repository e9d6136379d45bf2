//! Rendering options and process configuration.

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::debugger::DebugLevel;
use crate::frontend::lexer::is_identifier;

pub const LOG_ENV: &str = "STREAMSQL_LOG";
pub const RESERVED_WORDS_ENV: &str = "STREAMSQL_RESERVED_WORDS";

/// Controls how identifiers are rendered when a type or schema is displayed.
///
/// Names that match a reserved word (case-insensitively) are wrapped in
/// backticks, as are names that are not bare identifiers (spaces, leading
/// digits, non-ASCII letters, empty). [`FormatOptions::none`] reserves nothing
/// and is what `Display` uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    reserved: BTreeSet<String>,
}

impl FormatOptions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn of<I, S>(reserved_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let reserved = reserved_words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { reserved }
    }

    pub fn is_reserved_word(&self, word: &str) -> bool {
        !self.reserved.is_empty() && self.reserved.contains(&word.to_uppercase())
    }

    pub fn escape<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if !is_identifier(word) || self.is_reserved_word(word) {
            Cow::Owned(format!("`{}`", word.replace('`', "``")))
        } else {
            Cow::Borrowed(word)
        }
    }
}

/// Settings for the interactive shell, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub debug_level: DebugLevel,
    pub format: FormatOptions,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            debug_level: DebugLevel::Off,
            format: FormatOptions::none(),
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `lookup` maps an environment variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug_level = lookup(LOG_ENV)
            .or_else(|| lookup("RUST_LOG"))
            .and_then(|s| DebugLevel::parse(&s))
            .unwrap_or(DebugLevel::Off);

        let format = lookup(RESERVED_WORDS_ENV)
            .map(|words| FormatOptions::of(words.split(',')))
            .unwrap_or_default();

        Self {
            debug_level,
            format,
        }
    }

    /// Applies a `--debug=<n>` style argument on top of the environment.
    pub fn with_args<S: AsRef<str>>(mut self, args: &[S]) -> Self {
        if let Some(level) = args
            .iter()
            .filter_map(|arg| arg.as_ref().strip_prefix("--debug="))
            .find_map(DebugLevel::parse)
        {
            self.debug_level = level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_leaves_identifiers_alone() {
        let opts = FormatOptions::none();
        assert_eq!(opts.escape("SELECT"), "SELECT");
        assert_eq!(opts.escape("_f1"), "_f1");
        assert!(!opts.is_reserved_word("STRUCT"));
    }

    #[test]
    fn non_identifiers_are_always_quoted() {
        let opts = FormatOptions::none();
        assert_eq!(opts.escape("a b"), "`a b`");
        assert_eq!(opts.escape("1st"), "`1st`");
        assert_eq!(opts.escape("é"), "`é`");
        assert_eq!(opts.escape("x`y"), "`x``y`");
        assert_eq!(opts.escape(""), "``");
    }

    #[test]
    fn reserved_words_are_case_insensitive() {
        let opts = FormatOptions::of(["select", " From "]);
        assert_eq!(opts.escape("Select"), "`Select`");
        assert_eq!(opts.escape("FROM"), "`FROM`");
        assert_eq!(opts.escape("BLUE"), "BLUE");
    }

    #[test]
    fn embedded_backticks_are_doubled() {
        let opts = FormatOptions::of(["a`b"]);
        assert_eq!(opts.escape("a`b"), "`a``b`");
    }

    #[test]
    fn config_reads_lookup_and_args() {
        let cfg = ShellConfig::from_lookup(|key| match key {
            "RUST_LOG" => Some("info".to_string()),
            RESERVED_WORDS_ENV => Some("KEY,VALUE".to_string()),
            _ => None,
        });
        assert_eq!(cfg.debug_level, DebugLevel::Info);
        assert!(cfg.format.is_reserved_word("key"));

        let cfg = cfg.with_args(&["schemacli", "--debug=5"]);
        assert_eq!(cfg.debug_level, DebugLevel::Trace);
    }

    #[test]
    fn own_env_var_wins_over_rust_log() {
        let cfg = ShellConfig::from_lookup(|key| match key {
            LOG_ENV => Some("error".to_string()),
            "RUST_LOG" => Some("trace".to_string()),
            _ => None,
        });
        assert_eq!(cfg.debug_level, DebugLevel::Error);
        assert_eq!(cfg.format, FormatOptions::none());
    }
}
