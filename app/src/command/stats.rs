use std::path::PathBuf;

use memtrain_config::Config;
use memtrain_corpus::CorpusScanner;
use memtrain_dataset::build_datasets;
use tracing::info;

use crate::report;

/// Strategy for inspecting the corpus without writing any files: scan,
/// build in memory, and print the statistics report.
#[derive(Debug, Clone, Copy)]
pub struct StatsStrategy;

/// Input parameters for `StatsStrategy`.
pub struct StatsInput {
    /// Corpus root override; falls back to the configured root.
    pub root: Option<PathBuf>,
}

impl super::CommandStrategy for StatsStrategy {
    type Input = StatsInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let root = match input.root {
            Some(root) => root,
            None => config.corpus.resolve_root()?,
        };

        info!("Corpus root: {}", root.display());
        let records = CorpusScanner::new(root).scan();
        println!("Found {} memories", records.len());
        println!();

        let (datasets, stats) = build_datasets(&records);

        report::print_statistics(&stats, &config.report);
        report::print_dataset_sizes(&datasets);

        Ok(())
    }
}
