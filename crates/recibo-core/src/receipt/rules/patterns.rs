//! Fixed regex patterns and label-set compilation helpers.
//!
//! Patterns whose shape never changes live here as statics. Patterns driven
//! by configured label sets are compiled per parser from [`ExtractionRules`]
//! via [`label_alternation`].

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Latin date: D/M/YYYY with `/`, `.` or `-` separators.
    pub static ref DATE_DMY: Regex = Regex::new(
        r"(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4})"
    ).unwrap();

    /// Electronic-invoice UUID: 8-4-4-4-12 hex segments.
    pub static ref UUID_SEGMENTED: Regex = Regex::new(
        r"\b([0-9A-F]{8}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{12})\b"
    ).unwrap();

    /// Bare letter-group/digit-group pair used by the orphan rescue.
    pub static ref ORPHAN_PAIR: Regex = Regex::new(
        r"(?:^|\s)([A-Z]{1,5})\s+([0-9]{2,20})(?:\s|$)"
    ).unwrap();

    /// Money-shaped number: digits with optional thousands commas and
    /// exactly two fractional digits.
    pub static ref MONEY: Regex = Regex::new(
        r"([0-9][0-9,]*\.[0-9]{2})\b"
    ).unwrap();
}

/// Join a label set into a regex alternation, escaping each label.
///
/// Alternation order follows the configured order; callers list longer
/// labels before their prefixes ("NUMERO" before "NUM") so leftmost-first
/// matching picks the full form.
pub fn label_alternation(labels: &[String]) -> String {
    labels
        .iter()
        .map(|l| regex::escape(l))
        .collect::<Vec<_>>()
        .join("|")
}
