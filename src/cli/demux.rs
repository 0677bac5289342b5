use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use noodles::fastq;
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::core::types::{ReadLayout, DEFAULT_MARKER};
use crate::demux::metrics::{ReadCounter, TagCount};
use crate::demux::run::Demultiplexer;
use crate::demux::sink::FastqSinks;
use crate::matching::engine::{MatchPolicy, Matcher};
use crate::parsing::tag_file::parse_tag_file;

#[derive(Args)]
pub struct DemuxArgs {
    /// Tag file: one 'TAG  NAME' per line, plus a '*  NAME' line for unmatched reads
    #[arg(required = true)]
    pub tag_file: PathBuf,

    /// Single-end FASTQ file, or first mates of a paired-end run
    #[arg(short = 'f', long = "fastq_1", required = true)]
    pub fastq_1: PathBuf,

    /// Second mates of a paired-end run
    #[arg(short = 'F', long = "fastq_2")]
    pub fastq_2: Option<PathBuf>,

    /// Output files are named PREFIX-NAME.fastq (PREFIX-NAME_1.fastq and
    /// PREFIX-NAME_2.fastq for paired-end)
    #[arg(short = 'p', long = "output_prefix", default_value = "")]
    pub output_prefix: String,

    /// Match tags by similarity, accepting the closest unique tag whose
    /// similarity ratio is at least this value (0 to 1)
    #[arg(short = 'l', long = "levenshtein", alias = "rate")]
    pub rate: Option<f64>,

    /// With --levenshtein and paired-end input, both mates must reach the rate
    /// and agree on the same tag
    #[arg(long)]
    pub all: bool,
}

/// Summary of one demultiplexing run
#[derive(serde::Serialize)]
struct DemuxSummary<'a> {
    layout: ReadLayout,
    policy: String,
    units: u64,
    counts: &'a [TagCount],
}

fn open_fastq(path: &Path) -> anyhow::Result<fastq::io::Reader<BufReader<File>>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open FASTQ {}", path.display()))?;
    Ok(fastq::io::Reader::new(BufReader::new(file)))
}

/// Execute demux subcommand
///
/// # Errors
///
/// Returns an error if the tag file is invalid, the rate is out of range, an
/// input cannot be read, or an output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DemuxArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = parse_tag_file(&args.tag_file)
        .with_context(|| format!("Failed to load tag file {}", args.tag_file.display()))?;

    if args.all && args.rate.is_none() {
        warn!("--all has no effect without --levenshtein; using exact matching");
    }
    let policy = MatchPolicy::from_options(args.rate, args.all);
    let matcher = Matcher::new(&catalog, policy)?;

    let layout = if args.fastq_2.is_some() {
        ReadLayout::PairedEnd
    } else {
        ReadLayout::SingleEnd
    };

    if verbose {
        eprintln!(
            "Loaded {} tags ({} outputs), {} matching, {layout:?}",
            catalog.len(),
            catalog.destinations().len(),
            matcher.policy(),
        );
    }

    let mut sinks = FastqSinks::create(&catalog, &args.output_prefix, layout)
        .context("Failed to create output files")?;
    if verbose {
        for path in sinks.paths() {
            eprintln!("Writing {}", path.display());
        }
    }
    let mut counter = ReadCounter::new(&catalog);
    let demux = Demultiplexer::new(matcher);

    let mut reader_1 = open_fastq(&args.fastq_1)?;
    let units = match &args.fastq_2 {
        None => demux.run_single(reader_1.records(), &mut sinks, &mut counter)?,
        Some(path_2) => {
            let mut reader_2 = open_fastq(path_2)?;
            demux.run_paired(
                reader_1.records(),
                reader_2.records(),
                &mut sinks,
                &mut counter,
            )?
        }
    };
    sinks.finish().context("Failed to flush output files")?;

    info!(
        units,
        routed = counter.total(),
        unmatched = counter.get(DEFAULT_MARKER),
        "Demultiplexing complete"
    );

    match format {
        OutputFormat::Text => print_text_summary(&counter),
        OutputFormat::Json => print_json_summary(matcher.policy(), layout, units, &counter)?,
        OutputFormat::Tsv => print_tsv_summary(&counter),
    }

    Ok(())
}

fn print_text_summary(counter: &ReadCounter) {
    for row in counter.rows() {
        println!("{} {} reads", row.destination, row.reads);
    }
}

fn print_json_summary(
    policy: MatchPolicy,
    layout: ReadLayout,
    units: u64,
    counter: &ReadCounter,
) -> anyhow::Result<()> {
    let summary = DemuxSummary {
        layout,
        policy: policy.to_string(),
        units,
        counts: counter.rows(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn print_tsv_summary(counter: &ReadCounter) {
    println!("tag\tdestination\treads");
    for row in counter.rows() {
        println!("{}\t{}\t{}", row.tag, row.destination, row.reads);
    }
}
