//! Analogy command - how similar are the catalog's tags to each other.
//!
//! A similarity rate at or below the reported value can let a read that sits
//! between two tags be claimed by either, so this is a quick check before
//! choosing `--levenshtein`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::matching::scoring::max_pairwise_similarity;
use crate::parsing::tag_file::parse_tag_file;

/// Arguments for the analogy command
#[derive(Args)]
pub struct AnalogyArgs {
    /// Tag file: one 'TAG  NAME' per line, plus a '*  NAME' line
    #[arg(required = true)]
    pub tag_file: PathBuf,
}

/// Execute analogy subcommand
///
/// # Errors
///
/// Returns an error if the tag file cannot be read or is invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AnalogyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = parse_tag_file(&args.tag_file)
        .with_context(|| format!("Failed to load tag file {}", args.tag_file.display()))?;

    if verbose {
        eprintln!("Comparing {} tags pairwise", catalog.len());
    }

    let max = max_pairwise_similarity(&catalog);

    match format {
        OutputFormat::Text => {
            println!("Maximal similarity ratio between tags is {max:.6}");
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "tags": catalog.len(),
                "max_similarity": max,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("tags\tmax_similarity");
            println!("{}\t{max:.6}", catalog.len());
        }
    }

    Ok(())
}
