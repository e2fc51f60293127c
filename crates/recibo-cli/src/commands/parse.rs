//! Parse command - extract fields from a single recognized-text file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use recibo_core::models::receipt::FIELD_NAMES;
use recibo_core::{ExtractionResult, ReceiptParser};

use super::{build_parser, load_config};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file containing recognized text
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show which strategy matched each field
    #[arg(long)]
    show_strategies: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let parser = build_parser(&config)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Parsing file: {}", args.input.display());
    let result = parse_file(&parser, &args.input)?;

    if !result.warnings.is_empty() {
        eprintln!("{}", style("Fields requiring manual entry:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    if args.show_strategies {
        eprintln!("{}", style("Matched strategies:").cyan());
        for (field, strategy) in &result.strategies {
            eprintln!("  {}: {}", field, strategy);
        }
    }

    let output = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {}",
            style("Wrote").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

pub fn parse_file(parser: &ReceiptParser, path: &PathBuf) -> anyhow::Result<ExtractionResult> {
    let text = fs::read_to_string(path)?;
    Ok(parser.parse(&text))
}

pub fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.serialize(&result.fields)?;
            writer.flush()?;
            Ok(String::from_utf8(writer.into_inner()?)?)
        }
        OutputFormat::Text => {
            let values = [
                &result.fields.series,
                &result.fields.document_number,
                &result.fields.tax_id,
                &result.fields.amount,
                &result.fields.date,
            ];
            let mut out = String::new();
            for (name, value) in FIELD_NAMES.iter().zip(values) {
                if value.is_empty() {
                    out.push_str(&format!("{:16} (not found)\n", name));
                } else {
                    out.push_str(&format!("{:16} {}\n", name, value));
                }
            }
            Ok(out)
        }
    }
}
