//! Date extraction.

use tracing::debug;

use super::patterns::DATE_DMY;
use super::{ExtractionMatch, FieldExtractor};

/// Date extractor for the Latin `DD/MM/YYYY` family of formats.
///
/// The first date-like substring wins; the service date is printed before
/// any metadata date on these receipts. The output is reordered to
/// `YYYY-MM-DD` with zero-padded day and month. Semantic range validation is
/// deliberately left to the manual-entry form.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }

    fn first_match(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let caps = DATE_DMY.captures(text)?;
        let m = caps.get(0)?;
        let value = format!("{}-{:0>2}-{:0>2}", &caps[3], &caps[2], &caps[1]);
        Some(ExtractionMatch::new(value, "first_match").with_position(m.start(), m.end()))
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let result = self.first_match(text);
        if let Some(ref m) = result {
            debug!(strategy = m.strategy, "date matched");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_slash_separator() {
        let m = DateExtractor::new().extract("FECHA 05/09/2025").unwrap();
        assert_eq!(m.value, "2025-09-05");
    }

    #[test]
    fn test_dot_and_dash_separators() {
        assert_eq!(
            DateExtractor::new().extract("12.03.2024").unwrap().value,
            "2024-03-12"
        );
        assert_eq!(
            DateExtractor::new().extract("12-03-2024").unwrap().value,
            "2024-03-12"
        );
    }

    #[test]
    fn test_single_digit_zero_padded() {
        let m = DateExtractor::new().extract("5/9/2025").unwrap();
        assert_eq!(m.value, "2025-09-05");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let m = DateExtractor::new()
            .extract("FECHA: 01/02/2025 IMPRESO: 03/02/2025")
            .unwrap();
        assert_eq!(m.value, "2025-02-01");
    }

    #[test]
    fn test_structurally_invalid_passes_through() {
        // Range validation belongs to the manual-entry form.
        let m = DateExtractor::new().extract("99/99/2025").unwrap();
        assert_eq!(m.value, "2025-99-99");
    }

    #[test]
    fn test_no_date() {
        assert!(DateExtractor::new().extract("TOTAL 45.00").is_none());
    }
}
