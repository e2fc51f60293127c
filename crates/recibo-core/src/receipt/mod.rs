//! Receipt field extraction module.

pub mod normalize;
mod parser;
pub mod rules;

pub use parser::{ExtractionResult, ReceiptParser};

use crate::ocr::RecognizedText;

/// Trait for receipt field extraction.
///
/// Extraction itself is infallible: misses become empty fields, and only
/// the upstream recognition call can hard-fail (before extraction is ever
/// invoked).
pub trait ReceiptExtractor {
    /// Extract fields from a recognition result.
    fn extract(&self, recognized: &RecognizedText) -> ExtractionResult;

    /// Extract fields from plain text.
    fn extract_from_text(&self, text: &str) -> ExtractionResult;
}
