//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod parse;

use std::path::Path;

use recibo_core::{ReceiptParser, ReciboConfig};

/// Load the config file if given, defaults otherwise.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ReciboConfig> {
    match config_path {
        Some(path) => Ok(ReciboConfig::from_file(Path::new(path))?),
        None => Ok(ReciboConfig::default()),
    }
}

/// Build a parser from the effective rule set of a config.
pub fn build_parser(config: &ReciboConfig) -> anyhow::Result<ReceiptParser> {
    Ok(ReceiptParser::from_rules(
        &config.extraction.effective_rules(),
    )?)
}
