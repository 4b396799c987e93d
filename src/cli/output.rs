//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Everything except `error` writes to a caller-supplied writer so the
//! interactive shell can be driven from tests.

use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;
use itertools::Itertools;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix)
pub fn warning(out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}: {}", "Warning".yellow(), msg)
}

/// Print success status (green checkmark)
pub fn success(out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{} {}", "✓".green(), msg)
}

/// Print failure status (red X)
pub fn failure(out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{} {}", "✗".red(), msg)
}

/// Print section header (cyan bold)
pub fn header(out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}", msg.to_string().cyan().bold())
}

/// Print indented detail (no color)
pub fn detail(out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "  {}", msg)
}

/// Print plain output (no color)
pub fn info(out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}", msg)
}

/// Print a labelled word list: `label: [a, b, c]`
pub fn word_list<S: AsRef<str>>(out: &mut impl Write, label: &str, words: &[S]) -> io::Result<()> {
    writeln!(out, "{}: {}", label.green(), format_list(words))
}

/// Print prompt without newline (cyan)
pub fn prompt(out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    write!(out, "{}", msg.to_string().cyan())?;
    out.flush()
}

/// `[a, b, c]`
pub fn format_list<S: AsRef<str>>(words: &[S]) -> String {
    format!("[{}]", words.iter().map(|word| word.as_ref()).join(", "))
}
