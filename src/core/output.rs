//! Output helpers for user-facing messages.
//!
//! Standard output carries nothing but the branch tree, so diagnostics go to
//! standard error with the same visual markers everywhere.

use colored::*;

/// Formats and prints an error message to standard error
///
/// # Format
/// ```text
/// ✕ Error: <message>
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message in white
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✕ Error:".red(), message.white());
}
