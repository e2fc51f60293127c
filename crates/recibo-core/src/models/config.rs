//! Configuration structures for the extraction pipeline.
//!
//! Label sets, denylists, and numeric thresholds are configuration data
//! rather than literals inside the extractors, so alternate rule sets (other
//! languages, other currencies) can be swapped in without touching the
//! extraction logic. The choice of active rule set is the single
//! [`RuleProfile`] enumeration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Main configuration for the recibo pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReciboConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Which built-in rule set is active.
    pub profile: RuleProfile,

    /// Explicit rule overrides. When absent, the profile's built-in set is
    /// used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<ExtractionRules>,
}

impl ExtractionConfig {
    /// The rule set this configuration resolves to.
    pub fn effective_rules(&self) -> ExtractionRules {
        self.rules.clone().unwrap_or_else(|| self.profile.rules())
    }
}

/// Which generation of extraction rules is active.
///
/// The rule sets evolved in the field; rather than parallel code paths, each
/// generation is a data-only profile feeding the same extractors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleProfile {
    /// First-generation rules: narrower label sets, no UUID fallback,
    /// whole-text tax-ID search.
    Legacy,
    /// Current rules: union label sets, UUID fallback, header-anchored
    /// tax-ID search.
    #[default]
    Standard,
}

impl RuleProfile {
    /// Built-in rule set for this profile.
    pub fn rules(&self) -> ExtractionRules {
        match self {
            RuleProfile::Legacy => ExtractionRules::legacy(),
            RuleProfile::Standard => ExtractionRules::standard(),
        }
    }
}

/// Data-driven rule set consumed by the field extractors.
///
/// Labels are matched against normalized (uppercased, accent-stripped) text,
/// so they are spelled uppercase here, including the deliberately corrupted
/// forms that account for common recognition errors ("NUMER0", "5ERIE",
/// "NLT").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionRules {
    /// Explicit document-number labels, tried first.
    pub number_labels: Vec<String>,

    /// Looser document-number labels used as the last fallback.
    pub generic_number_labels: Vec<String>,

    /// Whether an 8-4-4-4-12 hex UUID counts as a document number when no
    /// explicit label matches.
    pub uuid_fallback: bool,

    /// Series labels, including truncated forms from dropped leading glyphs.
    pub series_labels: Vec<String>,

    /// Tax-ID labels.
    pub tax_id_labels: Vec<String>,

    /// Labels marking the authoritative total amount.
    pub total_labels: Vec<String>,

    /// Currency markers that may precede an amount.
    pub currency_markers: Vec<String>,

    /// Letter groups that must never be treated as a series by the
    /// orphan-pair rescue.
    pub rescue_denylist: Vec<String>,

    /// Amounts at or above this value are implausible for a small-expense
    /// receipt and are rejected by the disambiguator.
    pub amount_ceiling: Decimal,

    /// Calendar years that OCR commonly misreads as amounts.
    pub year_denylist: Vec<u32>,

    /// Number of leading lines searched for the tax ID before falling back
    /// to the full text. Zero disables the header restriction.
    pub header_lines: usize,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl ExtractionRules {
    /// Current rule set: the union of every label variant observed in the
    /// field.
    pub fn standard() -> Self {
        Self {
            number_labels: to_strings(&[
                "NUMERO", "NUMER0", "NUM", "NO.", "NO:", "N°", "#", "DTE",
            ]),
            generic_number_labels: to_strings(&[
                "TICKET", "DOCTO", "DOC", "FACTURA", "BOLETA", "TRANS", "FOLIO", "ENVIO", "ID",
            ]),
            uuid_fallback: true,
            series_labels: to_strings(&["SERIE", "5ERIE", "SER1E", "ERIE", "SER", "SR", "S."]),
            tax_id_labels: to_strings(&["N.I.T.", "N.I.T", "N.L.T.", "NIT", "NLT"]),
            total_labels: to_strings(&["TOTAL", "PAGAR", "VENTA", "EFECTIVO"]),
            currency_markers: to_strings(&["GTQ", "Q"]),
            rescue_denylist: to_strings(&[
                "TOTAL", "NIT", "FECHA", "PAGO", "CAJA", "EFECTIVO", "CAMBIO", "GTQ", "SUB",
                "VISA", "BAC", "PAGAR", "VENTA",
            ]),
            amount_ceiling: Decimal::from(50_000),
            year_denylist: vec![2023, 2024, 2025],
            header_lines: 15,
        }
    }

    /// First-generation rule set, kept for receipts archived before the
    /// label-set expansion.
    pub fn legacy() -> Self {
        Self {
            number_labels: to_strings(&[
                "NUMERO", "NUMER0", "NUM", "NO.", "NO:", "N°", "#", "DTE",
            ]),
            generic_number_labels: to_strings(&["TICKET", "DOCTO", "DOC", "FACTURA"]),
            uuid_fallback: false,
            series_labels: to_strings(&["SERIE", "ERIE", "SER", "SR", "S."]),
            tax_id_labels: to_strings(&["NIT"]),
            total_labels: to_strings(&["TOTAL", "PAGAR", "VENTA"]),
            currency_markers: to_strings(&["GTQ", "Q"]),
            rescue_denylist: to_strings(&[
                "TOTAL", "NIT", "PAGO", "EFECTIVO", "CAMBIO", "VISA", "GTQ", "SUB",
            ]),
            amount_ceiling: Decimal::from(50_000),
            year_denylist: vec![2024, 2025],
            header_lines: 0,
        }
    }
}

fn to_strings(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

impl ReciboConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Parse)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_standard() {
        let config = ReciboConfig::default();
        assert_eq!(config.extraction.profile, RuleProfile::Standard);
        assert_eq!(config.extraction.effective_rules(), ExtractionRules::standard());
    }

    #[test]
    fn test_legacy_profile_is_narrower() {
        let legacy = RuleProfile::Legacy.rules();
        let standard = RuleProfile::Standard.rules();

        assert!(!legacy.uuid_fallback);
        assert!(legacy.rescue_denylist.len() < standard.rescue_denylist.len());
        assert!(legacy.generic_number_labels.len() < standard.generic_number_labels.len());
    }

    #[test]
    fn test_rules_override_wins() {
        let mut rules = ExtractionRules::standard();
        rules.amount_ceiling = Decimal::from(1000);

        let config = ExtractionConfig {
            profile: RuleProfile::Standard,
            rules: Some(rules.clone()),
        };
        assert_eq!(config.effective_rules(), rules);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = ReciboConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ReciboConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.extraction.profile, RuleProfile::Standard);
    }
}
