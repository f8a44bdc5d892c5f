//! Remark processing utilities
//!
//! This module turns node labels into names that are safe to use as the key
//! of a Surfboard `[Proxy]` line.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{ProxyNode, DEFAULT_NODE_NAME};
use crate::utils::url_decode;

lazy_static! {
    // ASCII word characters, hyphen and CJK unified ideographs
    static ref LEGAL_NAME: Regex = Regex::new(r"^[A-Za-z0-9_\-\x{4e00}-\x{9fa5}]+$").unwrap();
    static ref ILLEGAL_CHAR: Regex = Regex::new(r"[^A-Za-z0-9_\-\x{4e00}-\x{9fa5}]").unwrap();
    static ref UNDERSCORE_RUN: Regex = Regex::new(r"_+").unwrap();
}

/// Normalizes a raw label into a safe identifier
///
/// The label is URL-decoded and stripped of control characters. Names that
/// are already safe pass through unchanged; anything else has its illegal
/// characters folded into single underscores. An empty result becomes
/// `node`. Applying the function twice gives the same result as once.
///
/// # Examples
///
/// ```
/// use surfconv::generator::config::remark::sanitize_name;
///
/// assert_eq!(sanitize_name("香港-01"), "香港-01");
/// assert_eq!(sanitize_name("US | Los Angeles"), "US_Los_Angeles");
/// assert_eq!(sanitize_name("%20%20"), "node");
/// ```
pub fn sanitize_name(raw: &str) -> String {
    let decoded = url_decode(raw);
    let cleaned: String = decoded
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n' | '\t'))
        .collect();
    let cleaned = cleaned.trim();

    if LEGAL_NAME.is_match(cleaned) {
        return cleaned.to_string();
    }

    let replaced = ILLEGAL_CHAR.replace_all(cleaned, "_");
    let collapsed = UNDERSCORE_RUN.replace_all(&replaced, "_");
    let trimmed = collapsed.trim_matches('_');
    if trimmed.is_empty() {
        DEFAULT_NODE_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Sanitizes every node name and appends its 1-based position as `_<index>`.
///
/// Duplicate labels are kept apart by the suffix alone; nothing is merged.
pub fn process_remarks(nodes: &mut [ProxyNode]) {
    for (index, node) in nodes.iter_mut().enumerate() {
        node.display_name = format!("{}_{}", sanitize_name(&node.display_name), index + 1);
    }
}
