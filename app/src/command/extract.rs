use std::path::PathBuf;

use memtrain_config::Config;
use memtrain_corpus::CorpusScanner;
use memtrain_dataset::{build_datasets, write_datasets};
use tracing::info;

use crate::report;

/// Strategy for the full extraction pipeline: scan the corpus, build the
/// datasets, print the report, and write the JSON/JSONL files.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

/// Input parameters for `ExtractStrategy`.
pub struct ExtractInput {
    /// Corpus root override; falls back to the configured root.
    pub root: Option<PathBuf>,

    /// Output directory override; falls back to the configured directory.
    pub output: Option<PathBuf>,
}

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let root = match input.root {
            Some(root) => root,
            None => config.corpus.resolve_root()?,
        };
        let output_dir = input.output.unwrap_or_else(|| config.output.dir.clone());

        println!("{}", report::BANNER);
        println!("Memory Training Data Extractor");
        println!("{}", report::BANNER);
        println!();

        println!("Scanning memory directories...");
        info!("Corpus root: {}", root.display());
        let records = CorpusScanner::new(root).scan();
        println!("Found {} memories", records.len());
        println!();

        println!("Extracting training data...");
        let (datasets, stats) = build_datasets(&records);

        println!();
        report::print_statistics(&stats, &config.report);
        report::print_dataset_sizes(&datasets);

        let written = write_datasets(&datasets, &output_dir)?;
        for path in &written {
            println!("Saved: {}", path.display());
        }

        println!();
        report::print_sample(&datasets, config.report.sample_size);

        Ok(())
    }
}
