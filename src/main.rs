use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Parser;
use serde_json::Value;

use jsoncat::{collect_records, write_array, CollectorOptions};

/// Combine every JSON file under a directory into a single JSON array
#[derive(Parser, Debug)]
#[command(name = "jsoncat")]
#[command(about = "Combine every JSON file under a directory into a single JSON array")]
#[command(version)]
struct CliArgs {
    /// Root directory to scan for .json files
    input: PathBuf,

    /// Output file path
    #[arg(short, long)]
    output: PathBuf,

    /// Spaces per indentation level (0-8, 0 means compact)
    #[arg(long, default_value_t = 4)]
    indent: u8,

    /// Abort on the first unreadable or unparsable file
    #[arg(long)]
    strict: bool,

    /// Suppress the completion summary
    #[arg(long)]
    quiet: bool,

    /// Print each aggregated file as it is processed
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    validate_args(&args)?;

    let options = CollectorOptions {
        strict: args.strict,
        verbose: args.verbose,
    };

    let outcome = collect_records(&args.input, &options)?;
    write_array(&outcome.records, &args.output, args.indent as usize)?;

    if !args.quiet {
        report_summary(&outcome.records, outcome.skipped.len(), &args.output);
    }

    Ok(())
}

fn validate_args(args: &CliArgs) -> Result<()> {
    if !args.input.is_dir() {
        bail!("input path is not a directory: {}", args.input.display());
    }
    if args.indent > 8 {
        bail!("--indent must be between 0 and 8, got {}", args.indent);
    }
    Ok(())
}

fn report_summary(records: &[Value], skipped: usize, output: &Path) {
    if skipped > 0 {
        println!("Aggregated {} records ({} skipped)", records.len(), skipped);
    } else {
        println!("Aggregated {} records", records.len());
    }

    // The aggregate may be empty; there is no first record to show then
    if let Some(first) = records.first() {
        println!("First record: {}", preview(first));
    }

    println!("✓ Combined output written to {}", output.display());
}

/// One-line preview of a record, truncated for the summary
fn preview(value: &Value) -> String {
    const MAX_CHARS: usize = 120;

    let compact = value.to_string();
    if compact.chars().count() <= MAX_CHARS {
        compact
    } else {
        let head: String = compact.chars().take(MAX_CHARS).collect();
        format!("{}...", head)
    }
}
