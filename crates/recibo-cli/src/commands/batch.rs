//! Batch command - extract fields from every text file in a directory.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use recibo_core::ExtractionResult;

use super::{build_parser, load_config};
use super::parse::parse_file;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Directory containing recognized-text files
    #[arg(required = true)]
    input_dir: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: BatchFormat,

    /// Glob pattern for input files, relative to the input directory
    #[arg(long, default_value = "*.txt")]
    pattern: String,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum BatchFormat {
    /// JSON array
    Json,
    /// CSV, one row per file
    Csv,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let parser = build_parser(&config)?;

    if !args.input_dir.is_dir() {
        anyhow::bail!("Not a directory: {}", args.input_dir.display());
    }

    let pattern = args.input_dir.join(&args.pattern);
    let files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| entry.ok())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No files matching {}", pattern.display());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?
            .progress_chars("##-"),
    );

    let mut results: Vec<ExtractionResult> = Vec::with_capacity(files.len());
    let mut failed = 0usize;

    for file in &files {
        pb.set_message(
            file.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        match parse_file(&parser, file) {
            Ok(result) => results.push(result),
            Err(e) => {
                warn!("skipping {}: {}", file.display(), e);
                failed += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    let output = match args.format {
        BatchFormat::Json => serde_json::to_string_pretty(&results)?,
        BatchFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for result in &results {
                writer.serialize(&result.fields)?;
            }
            writer.flush()?;
            String::from_utf8(writer.into_inner()?)?
        }
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {} receipts to {}",
            style("Wrote").green(),
            results.len(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if failed > 0 {
        eprintln!("{} {} file(s) skipped", style("Warning:").yellow(), failed);
    }

    Ok(())
}
