//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides the formatting helpers shared by the menu session
//! and the binary entry point, ensuring consistent colors, spacing, and
//! message structure across the whole tool.
//!
//! # Design Principles
//! - **Consistent color scheme**: red for errors, blue for section headers,
//!   bright_black for the brackets around menu keys
//! - **Plain payloads**: record names, labels, and values stay uncolored so
//!   scripted sessions can assert on them verbatim
//! - **Standardized spacing**: blank line before section headers and errors
//!
//! The session writes through its own `Write` handle; these helpers return
//! `String`s or print to stdout for the places (startup, farewell) that are
//! outside any session.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message);
}

/// One rendered menu line: `[key] label`
pub fn format_menu_line(key: char, label: &str) -> String {
    format!(
        "{}{}{} {}",
        "[".bright_black(),
        key.to_string().white(),
        "]".bright_black(),
        label
    )
}

/// One rendered disambiguation line: `[index] description`
pub fn format_match_line(index: usize, description: &str) -> String {
    format!(
        "{}{}{} {}",
        "[".bright_black(),
        index.to_string().white(),
        "]".bright_black(),
        description
    )
}

/// Section header shown above a menu or a result listing
pub fn format_section_header(header: &str) -> String {
    format!("\n{}:", header.blue())
}

/// The single line printed for recoverable mistakes inside a session
pub fn format_invalid_choice() -> String {
    format!("{} Invalid choice.", "✕".red())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_line_contains_key_and_label() {
        let line = format_menu_line('1', "Search student");
        assert!(line.contains('1'));
        assert!(line.contains("Search student"));
    }

    #[test]
    fn test_match_line_contains_index() {
        let line = format_match_line(2, "Jane Doe (jane@example.edu)");
        assert!(line.contains('2'));
        assert!(line.contains("Jane Doe"));
    }

    #[test]
    fn test_invalid_choice_message() {
        assert!(format_invalid_choice().contains("Invalid choice."));
    }

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Test error message");
    }
}
