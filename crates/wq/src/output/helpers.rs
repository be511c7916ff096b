//! Common helper functions for output formatting.

/// Truncates a string to a maximum number of characters.
///
/// Counts characters rather than bytes so multi-byte text is never split.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Renders an optional text cell, using `-` when absent.
pub fn optional_cell(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
