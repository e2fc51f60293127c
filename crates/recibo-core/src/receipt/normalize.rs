//! Canonicalization of recognized text before pattern matching.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize raw recognized text for matching.
///
/// Uppercases, strips diacritics via NFD decomposition, and replaces the
/// vertical bar with the digit one (thermal printers frequently render `1`
/// in a way the engine reads as `|`). Digit and currency sequences are left
/// intact. Idempotent and pure.
pub fn normalize(raw: &str) -> String {
    raw.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c == '|' { '1' } else { c })
        .flat_map(char::to_uppercase)
        .collect()
}

/// Split text into trimmed, non-empty lines.
pub fn trimmed_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}
