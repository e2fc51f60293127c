//! Document number (DTE) extraction.

use regex::Regex;
use tracing::debug;

use crate::error::ConfigError;
use crate::models::config::ExtractionRules;

use super::patterns::{UUID_SEGMENTED, label_alternation};
use super::{ExtractionMatch, FieldExtractor};

/// Document-number extractor.
///
/// Strategy order: explicit label, UUID shape (when enabled), generic label.
/// First success wins.
pub struct DocumentNumberExtractor {
    labeled: Regex,
    generic: Regex,
    uuid_fallback: bool,
}

impl DocumentNumberExtractor {
    pub fn new(rules: &ExtractionRules) -> Result<Self, ConfigError> {
        // Explicit labels include non-word forms ("#", "N°"), so no \b guard.
        let labeled = Regex::new(&format!(
            r"(?:{})\s*[:.]?\s*([0-9]+)",
            label_alternation(&rules.number_labels)
        ))
        .map_err(|e| ConfigError::rule("number_labels", e))?;

        let generic = Regex::new(&format!(
            r"\b(?:{})\s*[:.;\-]?\s*([A-Z0-9\-]{{1,25}})",
            label_alternation(&rules.generic_number_labels)
        ))
        .map_err(|e| ConfigError::rule("generic_number_labels", e))?;

        Ok(Self {
            labeled,
            generic,
            uuid_fallback: rules.uuid_fallback,
        })
    }

    /// Explicit label followed by a digit run.
    fn explicit_label(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let caps = self.labeled.captures(text)?;
        let m = caps.get(0)?;
        Some(
            ExtractionMatch::new(caps[1].to_string(), "explicit_label")
                .with_position(m.start(), m.end()),
        )
    }

    /// 8-4-4-4-12 hex segment pattern, unambiguous when present.
    fn uuid(&self, text: &str) -> Option<ExtractionMatch<String>> {
        if !self.uuid_fallback {
            return None;
        }
        let caps = UUID_SEGMENTED.captures(text)?;
        let m = caps.get(0)?;
        Some(
            ExtractionMatch::new(caps[1].to_string(), "uuid").with_position(m.start(), m.end()),
        )
    }

    /// Looser label set; non-digit characters stripped from the capture.
    fn generic_label(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let caps = self.generic.captures(text)?;
        let m = caps.get(0)?;
        let digits: String = caps[1].chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        Some(ExtractionMatch::new(digits, "generic_label").with_position(m.start(), m.end()))
    }
}

impl FieldExtractor for DocumentNumberExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let result = self
            .explicit_label(text)
            .or_else(|| self.uuid(text))
            .or_else(|| self.generic_label(text));

        if let Some(ref m) = result {
            debug!(strategy = m.strategy, "document number matched");
        }
        result
    }
}
