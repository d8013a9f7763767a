//! Terminal output utilities.
//!
//! Provides indentation and column helpers for the text report.

use crate::models::{BitAddress, PrefixLength};
use colored::Colorize;

/// Spaces per indent level.
pub const INDENT_WIDTH: usize = 3;

/// Prefix `output` with `level` indent steps.
pub fn indent(output: &str, level: usize) -> String {
    format!("{}{output}", " ".repeat(level * INDENT_WIDTH))
}

/// Format an address as a decimal column followed by its dotted binary form.
///
/// # Arguments
/// * `addr` - The address to format
/// * `prefix` - Appended to the decimal form in slash notation when present
/// * `level` - Indent level of the line
pub fn format_addr(addr: BitAddress, prefix: Option<PrefixLength>, level: usize) -> String {
    let decimal = match prefix {
        Some(prefix) => format!("{}/{}", addr.pretty_decimal(), prefix),
        None => addr.pretty_decimal(),
    };
    let line = format!("{decimal:<18} {:<32}", addr.pretty_binary());
    indent(line.trim_end(), level)
}

/// A bold section heading at the given indent level.
pub fn heading(label: &str, level: usize) -> String {
    indent(&label.bold().to_string(), level)
}
