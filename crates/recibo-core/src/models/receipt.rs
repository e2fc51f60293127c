//! Receipt data model produced by the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Structured fields extracted from a recognized receipt.
///
/// Every field except `raw_text` may be empty, meaning the heuristics could
/// not find it and the value requires manual entry. The record is always
/// returned fully populated with best-effort values; a missed field is not an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptFields {
    /// Document series code (alphanumeric, e.g. "A1B2").
    pub series: String,

    /// Document number (DTE), digits or an electronic-invoice UUID.
    pub document_number: String,

    /// Issuer tax ID (NIT), canonical hyphen-stripped form.
    pub tax_id: String,

    /// Total amount, formatted to exactly two decimal places.
    pub amount: String,

    /// Receipt date in `YYYY-MM-DD` form.
    pub date: String,

    /// The original recognized text, retained for user-facing review.
    pub raw_text: String,
}

/// Names of the extractable fields, in display order.
pub const FIELD_NAMES: [&str; 5] = ["series", "documentNumber", "taxId", "amount", "date"];

impl ReceiptFields {
    /// Names of fields the pipeline failed to extract.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let values = [
            &self.series,
            &self.document_number,
            &self.tax_id,
            &self.amount,
            &self.date,
        ];

        FIELD_NAMES
            .iter()
            .zip(values)
            .filter(|(_, v)| v.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    /// True when every field was extracted.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
