//! Tax ID (NIT) extraction.

use regex::Regex;
use tracing::debug;

use crate::error::ConfigError;
use crate::models::config::ExtractionRules;
use crate::receipt::normalize::trimmed_lines;

use super::patterns::label_alternation;
use super::{ExtractionMatch, FieldExtractor};

/// Tax-ID extractor.
///
/// The issuer NIT sits in the printed header, so the first
/// `header_lines` lines are searched before the full text. Captured values
/// are canonicalized to the hyphen-stripped form; a trailing check-letter K
/// is kept.
pub struct TaxIdExtractor {
    pattern: Regex,
    header_lines: usize,
}

impl TaxIdExtractor {
    pub fn new(rules: &ExtractionRules) -> Result<Self, ConfigError> {
        let pattern = Regex::new(&format!(
            r"\b(?:{})\s*[:.;\-]?\s*([0-9K\-]{{5,20}})",
            label_alternation(&rules.tax_id_labels)
        ))
        .map_err(|e| ConfigError::rule("tax_id_labels", e))?;

        Ok(Self {
            pattern,
            header_lines: rules.header_lines,
        })
    }

    fn capture(&self, text: &str, strategy: &'static str) -> Option<ExtractionMatch<String>> {
        let caps = self.pattern.captures(text)?;
        let value: String = caps[1].chars().filter(|c| *c != '-').collect();
        if value.is_empty() {
            return None;
        }
        let m = caps.get(0)?;
        Some(ExtractionMatch::new(value, strategy).with_position(m.start(), m.end()))
    }

    /// Header-anchored search over the first `header_lines` lines.
    fn header(&self, text: &str) -> Option<ExtractionMatch<String>> {
        if self.header_lines == 0 {
            return None;
        }
        let header: String = trimmed_lines(text)
            .into_iter()
            .take(self.header_lines)
            .collect::<Vec<_>>()
            .join("\n");
        self.capture(&header, "header")
    }

    fn full_text(&self, text: &str) -> Option<ExtractionMatch<String>> {
        self.capture(text, "full_text")
    }
}

impl FieldExtractor for TaxIdExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let result = self.header(text).or_else(|| self.full_text(text));
        if let Some(ref m) = result {
            debug!(strategy = m.strategy, "tax id matched");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn extractor() -> TaxIdExtractor {
        TaxIdExtractor::new(&ExtractionRules::standard()).unwrap()
    }

    #[test]
    fn test_hyphen_stripped() {
        let m = extractor().extract("NIT: 1234567-8").unwrap();
        assert_eq!(m.value, "12345678");
    }

    #[test]
    fn test_spelling_variants() {
        assert_eq!(extractor().extract("N.I.T. 765432-1").unwrap().value, "7654321");
        // "NlT" uppercases to "NLT" during normalization.
        assert_eq!(extractor().extract("NLT 765432-1").unwrap().value, "7654321");
    }

    #[test]
    fn test_trailing_check_letter_kept() {
        let m = extractor().extract("NIT: 123456-K").unwrap();
        assert_eq!(m.value, "123456K");
    }

    #[test]
    fn test_header_preferred_over_body() {
        let mut text = String::from("TIENDA EL SOL\nNIT: 111111-1\n");
        text.push_str(&"RENGLON\n".repeat(20));
        text.push_str("NIT: 999999-9\n");

        let m = extractor().extract(&text).unwrap();
        assert_eq!(m.value, "1111111");
        assert_eq!(m.strategy, "header");
    }

    #[test]
    fn test_body_fallback() {
        let mut text = "RENGLON\n".repeat(20);
        text.push_str("NIT: 999999-9\n");

        let m = extractor().extract(&text).unwrap();
        assert_eq!(m.value, "9999999");
        assert_eq!(m.strategy, "full_text");
    }

    #[test]
    fn test_too_short_is_miss() {
        assert!(extractor().extract("NIT: 123").is_none());
    }
}
