//! Command-line entry point.
//!
//! Downloading bulk data and scraping the comprehensive rules live
//! outside this tool; it consumes files that are already on disk.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use mtg_reports::{
    default_aggregators, load_cycles, run_pass, write_reports, CardStream, TypeVocabulary,
};

#[derive(Parser)]
#[command(name = "mtg-reports", about = "Streaming reports over bulk card data", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every report over a bulk card file and write the results.
    Run {
        /// Bulk card data: a JSON array or newline-delimited objects.
        #[arg(long)]
        input: PathBuf,

        /// Directory the report files are written to.
        #[arg(long)]
        output: PathBuf,

        /// Creature-type vocabulary, one type per line.
        #[arg(long)]
        creature_types: Option<PathBuf>,

        /// Land-type vocabulary, one type per line.
        #[arg(long)]
        land_types: Option<PathBuf>,

        /// Cycle definitions as a JSON array.
        #[arg(long)]
        cycles: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "run failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> mtg_reports::Result<()> {
    match cli.command {
        Command::Run {
            input,
            output,
            creature_types,
            land_types,
            cycles,
        } => {
            let vocab = match (creature_types, land_types) {
                (Some(creatures), Some(lands)) => TypeVocabulary::load(&creatures, &lands),
                (Some(creatures), None) => {
                    TypeVocabulary::new(mtg_reports::vocab::load_types(&creatures), Default::default())
                }
                (None, Some(lands)) => {
                    TypeVocabulary::new(Default::default(), mtg_reports::vocab::load_types(&lands))
                }
                (None, None) => TypeVocabulary::empty(),
            };
            let cycle_defs = cycles.as_deref().map(load_cycles).unwrap_or_default();

            let mut aggregators = default_aggregators(&vocab, cycle_defs);
            let stream = CardStream::from_path(&input)?;
            run_pass(stream, &mut aggregators)?;
            write_reports(&output, &mut aggregators)
        }
    }
}
