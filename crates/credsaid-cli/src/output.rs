//! Output formatting utilities.

use serde_json::Value;

/// Formats a document as pretty JSON.
pub fn format_json(document: &Value) -> String {
    serde_json::to_string_pretty(document).unwrap_or_else(|_| "{}".to_string())
}

/// Prints the verification table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<24} {:<44} {}", "DOCUMENT", "SAID", "STATUS");
    println!("{}", "-".repeat(80));
}

/// Shortens text to `max_len` characters, marking the cut with `...`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
