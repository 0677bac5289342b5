//! Command-line interface for tag-demux.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **demux**: Route FASTQ reads to per-tag output files and trim the tag
//! - **analogy**: Report the maximal similarity between catalog tags
//!
//! ## Usage
//!
//! ```text
//! # Single-end, exact tag matching
//! tag-demux demux tags.txt -f reads.fastq -p run1
//!
//! # Paired-end, similarity matching at 0.8
//! tag-demux demux tags.txt -f reads_1.fastq -F reads_2.fastq -p run1 -l 0.8
//!
//! # Both mates must agree on the tag
//! tag-demux demux tags.txt -f reads_1.fastq -F reads_2.fastq -l 0.8 --all
//!
//! # How close are the tags to each other?
//! tag-demux analogy tags.txt
//! ```

use clap::{Parser, Subcommand};

pub mod analogy;
pub mod demux;

#[derive(Parser)]
#[command(name = "tag-demux")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Demultiplex FASTQ reads by their leading tag")]
#[command(
    long_about = "tag-demux sends each read (or read pair) to an output file chosen by the tag at the start of the read, and removes the tag.\n\nThe tag file lists one 'TAG  NAME' mapping per line plus a '*  NAME' line for reads that match no tag:\n\n    ATCGCA    sample_a\n    CCAGTG    sample_b\n    *         trash"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (logs where every read goes)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for the summary
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Demultiplex reads by tag
    Demux(demux::DemuxArgs),

    /// Compute the maximal similarity ratio between tags
    Analogy(analogy::AnalogyArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
