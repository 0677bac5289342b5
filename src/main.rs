use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod core;
mod demux;
mod matching;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("tag_demux=debug,info")
    } else {
        EnvFilter::new("tag_demux=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Demux(args) => {
            cli::demux::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Analogy(args) => {
            cli::analogy::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
