//! Single-pass dataset construction from parsed memory records.

use memtrain_corpus::{Frontmatter, MemoryRecord};
use tracing::debug;

use crate::example::{DatasetCollection, DatasetKind, TrainingExample, normalize_tag};
use crate::stats::CorpusStats;

/// Build the per-classifier datasets and their counters in one pass.
///
/// A record with neither trigger phrases nor semantic tags contributes only
/// to the scanned total. Each non-empty trigger phrase pairs with every
/// non-empty label field of its record, emitting one example per pair.
/// Semantic tags seed the context-type dataset only, normalized with
/// [`normalize_tag`]; tag-derived examples do not bump the label counters.
#[must_use]
pub fn build_datasets(records: &[MemoryRecord]) -> (DatasetCollection, CorpusStats) {
    let mut datasets = DatasetCollection::default();
    let mut stats = CorpusStats {
        total_records: records.len(),
        ..CorpusStats::default()
    };

    for record in records {
        let fm = &record.frontmatter;
        if !fm.has_training_signal() {
            continue;
        }

        stats.trigger_phrase_count += fm.trigger_phrases.len();
        stats.semantic_tag_count += fm.semantic_tags.len();

        for phrase in &fm.trigger_phrases {
            if phrase.is_empty() {
                continue;
            }
            for kind in DatasetKind::ALL {
                let label = label_field(fm, kind);
                if label.is_empty() {
                    continue;
                }
                datasets.push(kind, TrainingExample::new(phrase.clone(), label));
                stats.counts_mut(kind).increment(label);
            }
        }

        // Tags seed the context-type dataset only, normalized to read like
        // short queries. Not mirrored for domain/temporal.
        for tag in &fm.semantic_tags {
            if tag.is_empty() || fm.context_type.is_empty() {
                continue;
            }
            datasets.push(
                DatasetKind::ContextType,
                TrainingExample::new(normalize_tag(tag), fm.context_type.clone()),
            );
        }
    }

    debug!(
        "built {} examples from {} records",
        datasets.total_examples(),
        stats.total_records
    );

    (datasets, stats)
}

fn label_field(fm: &Frontmatter, kind: DatasetKind) -> &str {
    match kind {
        DatasetKind::ContextType => &fm.context_type,
        DatasetKind::Domain => &fm.domain,
        DatasetKind::TemporalClass => &fm.temporal_class,
    }
}
