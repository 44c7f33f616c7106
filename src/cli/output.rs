//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically. All helpers
//! write to a caller-supplied writer so the menu tests can capture output.

use std::io::{self, Write};

use colored::Colorize;

/// Print warning (yellow marker)
pub fn warning<W: Write>(out: &mut W, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{} {}", "warning:".yellow(), msg)
}

/// Print success status (green checkmark)
pub fn success<W: Write>(out: &mut W, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{} {}", "✓".green(), msg)
}

/// Print section header (cyan bold)
pub fn header<W: Write>(out: &mut W, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}", msg.to_string().cyan().bold())
}

/// Print plain output (no color, for data the user asked for)
pub fn info<W: Write>(out: &mut W, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}", msg)
}

/// Print prompt without newline (cyan), flushed
pub fn prompt<W: Write>(out: &mut W, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    write!(out, "{} ", msg.to_string().cyan())?;
    out.flush()
}
