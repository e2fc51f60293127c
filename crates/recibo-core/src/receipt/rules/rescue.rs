//! Orphan-pair rescue for unlabeled series/number pairs.

use tracing::debug;

use crate::models::config::ExtractionRules;

use super::ExtractionMatch;
use super::patterns::ORPHAN_PAIR;

/// A bare letter-group/digit-group pair found without labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanPair {
    /// Candidate series code.
    pub series: String,
    /// Candidate document number.
    pub number: String,
}

/// Cross-field rescue invoked when labeled extraction left series or
/// document number empty.
///
/// Basic thermal printers often print series and number as a bare adjacent
/// pair. The letter group is checked against a denylist of receipt keywords
/// so that label/value pairs belonging to other fields ("TOTAL 45.00") are
/// never mistaken for a series/number pair. The first pair passing the
/// denylist is used; later pairs are ignored.
pub struct OrphanPairRescue {
    denylist: Vec<String>,
}

impl OrphanPairRescue {
    pub fn new(rules: &ExtractionRules) -> Self {
        Self {
            denylist: rules.rescue_denylist.clone(),
        }
    }

    /// First non-denylisted pair in the text.
    pub fn find(&self, text: &str) -> Option<ExtractionMatch<OrphanPair>> {
        let mut start = 0;
        while let Some(caps) = ORPHAN_PAIR.captures_at(text, start) {
            let letters = &caps[1];
            let digits = caps.get(2)?;

            if self.denylist.iter().any(|d| d == letters) {
                // Resume before the trailing boundary so an adjacent pair
                // still sees its leading whitespace.
                start = digits.end();
                continue;
            }

            debug!(series = letters, "orphan pair rescued");
            let m = caps.get(0)?;
            return Some(
                ExtractionMatch::new(
                    OrphanPair {
                        series: letters.to_string(),
                        number: digits.as_str().to_string(),
                    },
                    "orphan_pair",
                )
                .with_position(m.start(), m.end()),
            );
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rescue() -> OrphanPairRescue {
        OrphanPairRescue::new(&ExtractionRules::standard())
    }

    #[test]
    fn test_bare_pair_found() {
        let m = rescue().find("XJ 99871").unwrap();
        assert_eq!(m.value.series, "XJ");
        assert_eq!(m.value.number, "99871");
        assert_eq!(m.strategy, "orphan_pair");
    }

    #[test]
    fn test_denylisted_pair_skipped() {
        assert!(rescue().find("TOTAL 45").is_none());
        assert!(rescue().find("NIT 123456").is_none());
    }

    #[test]
    fn test_first_clean_pair_wins() {
        let m = rescue().find("CAJA 04\nXJ 99871\nAB 12").unwrap();
        assert_eq!(m.value.series, "XJ");
        assert_eq!(m.value.number, "99871");
    }

    #[test]
    fn test_adjacent_after_denylisted() {
        // The denylisted pair must not swallow the whitespace the next pair
        // needs as its leading boundary.
        let m = rescue().find("GTQ 45 XJ 99871").unwrap();
        assert_eq!(m.value.series, "XJ");
    }

    #[test]
    fn test_too_many_letters_not_a_pair() {
        assert!(rescue().find("FACTURA 99871").is_none());
    }

    #[test]
    fn test_custom_denylist() {
        let mut rules = ExtractionRules::standard();
        rules.rescue_denylist.push("XJ".to_string());
        assert!(OrphanPairRescue::new(&rules).find("XJ 99871").is_none());
    }
}
