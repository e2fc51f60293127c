//! Rule-based receipt parser: normalization, per-field extraction, rescue,
//! and result assembly.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::config::{ExtractionRules, RuleProfile};
use crate::models::receipt::ReceiptFields;
use crate::ocr::RecognizedText;

use super::normalize::normalize;
use super::rules::{
    AmountExtractor, DateExtractor, DocumentNumberExtractor, ExtractionMatch, FieldExtractor,
    OrphanPairRescue, SeriesExtractor, TaxIdExtractor,
};
use super::ReceiptExtractor;

/// Result of one extraction run.
///
/// Created fresh per recognized text and never mutated afterwards; the
/// manual-correction form works on its own editable copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted receipt fields, empty strings for misses.
    pub fields: ReceiptFields,

    /// One warning per field the heuristics missed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,

    /// Which strategy produced each extracted field.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub strategies: BTreeMap<String, String>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Rule-based receipt parser.
///
/// Stateless between invocations: every call operates on its own buffers and
/// is deterministic for a given input text.
pub struct ReceiptParser {
    document: DocumentNumberExtractor,
    series: SeriesExtractor,
    tax_id: TaxIdExtractor,
    date: DateExtractor,
    amount: AmountExtractor,
    rescue: OrphanPairRescue,
}

impl ReceiptParser {
    /// Parser with the standard rule profile.
    pub fn new() -> Self {
        // The built-in profiles always compile.
        Self::from_rules(&RuleProfile::Standard.rules()).unwrap()
    }

    /// Parser for a built-in profile.
    pub fn from_profile(profile: RuleProfile) -> Self {
        Self::from_rules(&profile.rules()).unwrap()
    }

    /// Parser from an explicit rule set.
    pub fn from_rules(rules: &ExtractionRules) -> Result<Self> {
        Ok(Self {
            document: DocumentNumberExtractor::new(rules)?,
            series: SeriesExtractor::new(rules)?,
            tax_id: TaxIdExtractor::new(rules)?,
            date: DateExtractor::new(),
            amount: AmountExtractor::new(rules)?,
            rescue: OrphanPairRescue::new(rules),
        })
    }

    /// Run the pipeline over raw recognized text.
    ///
    /// Never fails: a field whose patterns do not match comes back as an
    /// empty string with a matching warning. The original text is attached
    /// for user-facing review.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        let normalized = normalize(text);
        info!(chars = normalized.len(), "parsing recognized text");

        let mut strategies = BTreeMap::new();

        let mut document_number = take(
            &mut strategies,
            "documentNumber",
            self.document.extract(&normalized),
        );
        let mut series = take(&mut strategies, "series", self.series.extract(&normalized));

        // Rescue runs at most once, only for the fields still empty.
        if series.is_empty() || document_number.is_empty() {
            if let Some(pair) = self.rescue.find(&normalized) {
                debug!("orphan-pair rescue applied");
                if series.is_empty() {
                    series = pair.value.series;
                    strategies.insert("series".to_string(), pair.strategy.to_string());
                }
                if document_number.is_empty() {
                    document_number = pair.value.number;
                    strategies.insert("documentNumber".to_string(), pair.strategy.to_string());
                }
            }
        }

        let tax_id = take(&mut strategies, "taxId", self.tax_id.extract(&normalized));
        let date = take(&mut strategies, "date", self.date.extract(&normalized));
        let amount = take(&mut strategies, "amount", self.amount.extract(&normalized));

        let fields = ReceiptFields {
            series,
            document_number,
            tax_id,
            amount,
            date,
            raw_text: text.to_string(),
        };

        let warnings = fields
            .missing_fields()
            .into_iter()
            .map(|name| format!("could not extract {name}"))
            .collect();

        ExtractionResult {
            fields,
            warnings,
            strategies,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Record the winning strategy and unwrap the value, or empty on a miss.
fn take(
    strategies: &mut BTreeMap<String, String>,
    field: &str,
    m: Option<ExtractionMatch<String>>,
) -> String {
    match m {
        Some(m) => {
            strategies.insert(field.to_string(), m.strategy.to_string());
            m.value
        }
        None => String::new(),
    }
}

impl Default for ReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptExtractor for ReceiptParser {
    fn extract(&self, recognized: &RecognizedText) -> ExtractionResult {
        self.parse(&recognized.text)
    }

    fn extract_from_text(&self, text: &str) -> ExtractionResult {
        self.parse(text)
    }
}
