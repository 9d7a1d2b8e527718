//! String utility functions for text processing

/// Shorten a string for log output
///
/// # Arguments
///
/// * `s` - The input string
/// * `max_chars` - Number of characters to keep
///
/// # Returns
///
/// The first `max_chars` characters followed by `...`, or the whole string if it is short enough
pub fn preview(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

/// Returns `None` for empty or whitespace-only input, the trimmed string otherwise
pub fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
