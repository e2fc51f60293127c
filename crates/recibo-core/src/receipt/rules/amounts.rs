//! Amount extraction and disambiguation.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::ConfigError;
use crate::models::config::ExtractionRules;

use super::patterns::{MONEY, label_alternation};
use super::{ExtractionMatch, FieldExtractor};

/// Amount extractor.
///
/// A labeled total ("TOTAL Q45.00") is authoritative: when present, every
/// other money-shaped number on the receipt is ignored. Without a label the
/// disambiguator collects all candidates, drops implausible values, and
/// takes the maximum, since the grand total is typically the largest
/// printed figure.
pub struct AmountExtractor {
    labeled: Regex,
    ceiling: Decimal,
    year_denylist: Vec<Decimal>,
}

impl AmountExtractor {
    pub fn new(rules: &ExtractionRules) -> Result<Self, ConfigError> {
        let currency = if rules.currency_markers.is_empty() {
            String::new()
        } else {
            format!(r"(?:{})?\s*", label_alternation(&rules.currency_markers))
        };

        let labeled = Regex::new(&format!(
            r"\b(?:{})\s*[:.]?\s*{}[:.]?\s*([0-9,]+\.[0-9]{{2}})",
            label_alternation(&rules.total_labels),
            currency,
        ))
        .map_err(|e| ConfigError::rule("total_labels", e))?;

        Ok(Self {
            labeled,
            ceiling: rules.amount_ceiling,
            year_denylist: rules.year_denylist.iter().map(|y| Decimal::from(*y)).collect(),
        })
    }

    /// Explicit total label; authoritative when present.
    fn labeled_total(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let caps = self.labeled.captures(text)?;
        let value = Decimal::from_str(&clean_amount(&caps[1])).ok()?;
        let m = caps.get(0)?;
        Some(
            ExtractionMatch::new(format_amount(value), "labeled_total")
                .with_position(m.start(), m.end()),
        )
    }

    /// All money-shaped candidates in the text, glyph-repaired and parsed.
    pub fn candidates(&self, text: &str) -> Vec<Decimal> {
        MONEY
            .captures_iter(text)
            .filter_map(|caps| Decimal::from_str(&clean_amount(&caps[1])).ok())
            .collect()
    }

    fn plausible(&self, value: &Decimal) -> bool {
        *value > Decimal::ZERO
            && *value < self.ceiling
            && !self.year_denylist.contains(value)
    }

    /// Maximum plausible candidate when no labeled total exists.
    fn largest_plausible(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let best = MONEY
            .captures_iter(text)
            .filter_map(|caps| {
                let m = caps.get(1)?;
                let value = Decimal::from_str(&clean_amount(m.as_str())).ok()?;
                self.plausible(&value)
                    .then(|| (value, m.start(), m.end()))
            })
            .max_by(|a, b| a.0.cmp(&b.0))?;

        Some(
            ExtractionMatch::new(format_amount(best.0), "largest_plausible")
                .with_position(best.1, best.2),
        )
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let result = self
            .labeled_total(text)
            .or_else(|| self.largest_plausible(text));

        if let Some(ref m) = result {
            debug!(strategy = m.strategy, "amount matched");
        }
        result
    }
}

/// Repair common recognition errors inside a money-shaped capture and strip
/// thousands commas.
pub fn clean_amount(s: &str) -> String {
    s.chars()
        .filter(|c| *c != ',')
        .map(|c| match c {
            'O' | 'o' => '0',
            'l' | 'L' => '1',
            'S' | 's' => '5',
            other => other,
        })
        .collect()
}

/// Format an amount to exactly two decimal places.
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", value)
}
