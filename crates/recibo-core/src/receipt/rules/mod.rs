//! Rule-based field extractors for Guatemalan receipts.
//!
//! Each extractor is an ordered list of named strategies, every strategy a
//! pure function of the normalized text. Strategies are evaluated in
//! priority order and the first success wins; partial matches are never
//! merged across strategies.

pub mod amounts;
pub mod dates;
pub mod document;
pub mod nit;
pub mod patterns;
pub mod rescue;
pub mod series;

pub use amounts::AmountExtractor;
pub use dates::DateExtractor;
pub use document::DocumentNumberExtractor;
pub use nit::TaxIdExtractor;
pub use rescue::{OrphanPair, OrphanPairRescue};
pub use series::SeriesExtractor;

/// Trait for field extractors operating on normalized text.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field, or `None` when no strategy matches.
    fn extract(&self, text: &str) -> Option<ExtractionMatch<Self::Output>>;
}

/// A single strategy hit.
///
/// Records which strategy produced the value so fallback chains can be
/// asserted on strategy by strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Name of the strategy that matched.
    pub strategy: &'static str,
    /// Byte range of the match in the normalized text.
    pub position: Option<(usize, usize)>,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, strategy: &'static str) -> Self {
        Self {
            value,
            strategy,
            position: None,
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
