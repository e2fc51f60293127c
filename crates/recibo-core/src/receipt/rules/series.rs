//! Document series extraction.

use regex::Regex;
use tracing::debug;

use crate::error::ConfigError;
use crate::models::config::ExtractionRules;

use super::patterns::label_alternation;
use super::{ExtractionMatch, FieldExtractor};

/// Series extractor.
///
/// A captured value is accepted only if it contains at least one letter;
/// purely numeric captures are more likely a number field behind a corrupted
/// label and fall through to the orphan-pair rescue.
pub struct SeriesExtractor {
    pattern: Regex,
}

impl SeriesExtractor {
    pub fn new(rules: &ExtractionRules) -> Result<Self, ConfigError> {
        let pattern = Regex::new(&format!(
            r"\b(?:{})\s*[:.;\-]?\s*([A-Z0-9\-]{{1,15}})",
            label_alternation(&rules.series_labels)
        ))
        .map_err(|e| ConfigError::rule("series_labels", e))?;

        Ok(Self { pattern })
    }

    fn labeled(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let caps = self.pattern.captures(text)?;
        let value = &caps[1];
        if !value.chars().any(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let m = caps.get(0)?;
        Some(ExtractionMatch::new(value.to_string(), "labeled").with_position(m.start(), m.end()))
    }
}

impl FieldExtractor for SeriesExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let result = self.labeled(text);
        if let Some(ref m) = result {
            debug!(strategy = m.strategy, "series matched");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn extractor() -> SeriesExtractor {
        SeriesExtractor::new(&ExtractionRules::standard()).unwrap()
    }

    #[test]
    fn test_labeled_series() {
        let m = extractor().extract("SERIE: AB123").unwrap();
        assert_eq!(m.value, "AB123");
        assert_eq!(m.strategy, "labeled");
    }

    #[test]
    fn test_truncated_label() {
        // The engine often drops the leading glyph of "SERIE".
        assert_eq!(extractor().extract("ERIE: C2").unwrap().value, "C2");
    }

    #[test]
    fn test_corrupted_labels() {
        assert_eq!(extractor().extract("5ERIE A7").unwrap().value, "A7");
        assert_eq!(extractor().extract("SER1E A7").unwrap().value, "A7");
    }

    #[test]
    fn test_numeric_capture_rejected() {
        // A pure digit run after a series label is likely a mis-anchored
        // number field.
        assert!(extractor().extract("SERIE: 45123").is_none());
    }

    #[test]
    fn test_hyphenated_series_kept() {
        assert_eq!(extractor().extract("SERIE B-12").unwrap().value, "B-12");
    }

    #[test]
    fn test_no_label_no_match() {
        assert!(extractor().extract("TOTAL 45.00").is_none());
    }
}
