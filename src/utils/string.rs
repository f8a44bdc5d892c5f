//! String utility functions for text processing

/// Returns at most `max_chars` characters from the start of `s`.
///
/// Used to quote offending input in diagnostics without dumping whole
/// credentials into the log.
pub fn snippet(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Interprets a flag written as `1`/`true` (any case) as set.
pub fn is_truthy(s: &str) -> bool {
    s == "1" || s.eq_ignore_ascii_case("true")
}

/// Renders a boolean the way Surfboard expects it.
pub fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
