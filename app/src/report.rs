//! Console report for scan statistics and dataset contents.

use memtrain_config::ReportConfig;
use memtrain_dataset::{CorpusStats, DatasetCollection, DatasetKind};

pub const BANNER: &str = "============================================================";

/// Print record totals and the per-label distribution tables.
pub fn print_statistics(stats: &CorpusStats, report: &ReportConfig) {
    println!("{BANNER}");
    println!("STATISTICS");
    println!("{BANNER}");
    println!("Total memories: {}", stats.total_records);
    println!("Total trigger phrases: {}", stats.trigger_phrase_count);
    println!("Total semantic tags: {}", stats.semantic_tag_count);
    println!();

    println!("Context Type Distribution:");
    print_distribution(stats, DatasetKind::ContextType, None);
    println!();

    println!("Domain Distribution (top {}):", report.domain_top);
    print_distribution(stats, DatasetKind::Domain, Some(report.domain_top));
    println!();

    println!("Temporal Class Distribution:");
    print_distribution(stats, DatasetKind::TemporalClass, None);
    println!();
}

/// Print the number of examples in each dataset.
pub fn print_dataset_sizes(datasets: &DatasetCollection) {
    println!("{BANNER}");
    println!("DATASET SIZES");
    println!("{BANNER}");
    for (kind, examples) in datasets.iter() {
        println!("  {kind}: {} examples", examples.len());
    }
    println!();
}

/// Echo the first `sample_size` context-type examples.
pub fn print_sample(datasets: &DatasetCollection, sample_size: usize) {
    println!("{BANNER}");
    println!("SAMPLE DATA (context_type)");
    println!("{BANNER}");
    for example in datasets.get(DatasetKind::ContextType).iter().take(sample_size) {
        println!("  \"{}\" -> {}", example.text, example.label);
    }
}

fn print_distribution(stats: &CorpusStats, kind: DatasetKind, limit: Option<usize>) {
    for (label, count) in stats.counts(kind).most_common(limit) {
        println!("  {label}: {count}");
    }
}
