#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;
mod report;

use command::{
    CommandStrategy, ExtractInput, ExtractStrategy, InitStrategy, StatsInput, StatsStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "memtrain")]
#[command(about = "Build intent-classifier training data from local memory files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the memory corpus and write the training datasets
    Extract {
        /// Corpus root to scan instead of the configured one
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Directory the dataset files are written to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Scan the memory corpus and print statistics without writing files
    Stats {
        /// Corpus root to scan instead of the configured one
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { root, output } => {
            ExtractStrategy.execute(ExtractInput { root, output })
        }
        Commands::Stats { root } => StatsStrategy.execute(StatsInput { root }),
        Commands::Init => InitStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
