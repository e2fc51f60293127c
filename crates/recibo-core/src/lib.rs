//! Core library for receipt OCR text extraction.
//!
//! This crate provides:
//! - normalization of recognized text (case folding, accent stripping,
//!   glyph-confusion repair)
//! - layered per-field extraction for Guatemalan receipts (series, document
//!   number, NIT, date, amount) with fallback chains
//! - the orphan-pair rescue and amount disambiguation heuristics
//! - configuration-driven rule sets

pub mod error;
pub mod models;
pub mod ocr;
pub mod receipt;

pub use error::{ConfigError, RecognitionError, ReciboError, Result};
pub use models::config::{ExtractionConfig, ExtractionRules, ReciboConfig, RuleProfile};
pub use models::receipt::ReceiptFields;
pub use ocr::{ProgressSink, RecognitionEngine, RecognitionProgress, RecognizedText};
pub use receipt::normalize::normalize;
pub use receipt::{ExtractionResult, ReceiptExtractor, ReceiptParser};
