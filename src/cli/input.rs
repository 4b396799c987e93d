//! Validation of user-supplied words and prefixes
//!
//! Runs before anything reaches the dictionary; the tree itself accepts any string.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::cli::{CliError, CliResult};

/// What the user was asked for, used in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Word,
    Prefix,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Word => write!(f, "word"),
            InputKind::Prefix => write!(f, "prefix"),
        }
    }
}

fn digits_only() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"^[0-9]+$").expect("static regex"))
}

/// Trim `input` and reject digit-only or empty values.
pub fn validate(input: &str, kind: InputKind) -> CliResult<&str> {
    let trimmed = input.trim();
    if digits_only().is_match(trimmed) {
        return Err(CliError::InvalidInput(format!(
            "{kind} must contain letters, not only digits"
        )));
    }
    if trimmed.is_empty() {
        return Err(CliError::InvalidInput(format!("enter a non-empty {kind}")));
    }
    Ok(trimmed)
}
