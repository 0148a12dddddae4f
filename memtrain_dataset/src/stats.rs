//! Frequency counters accumulated while building datasets.
//!
//! Stats are derived, not authoritative: they exist for the console report
//! and are discarded after it.

use std::collections::HashMap;

use crate::example::DatasetKind;

/// Label frequency table.
#[derive(Debug, Clone, Default)]
pub struct LabelCounter {
    counts: HashMap<String, usize>,
}

impl LabelCounter {
    /// Count one more occurrence of `label`.
    pub fn increment(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
    }

    /// Occurrences recorded for `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum over all labels.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Labels sorted by descending count, truncated to `limit` if given.
    ///
    /// Ties break by label so report output is deterministic.
    #[must_use]
    pub fn most_common(&self, limit: Option<usize>) -> Vec<(String, usize)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(label, count)| (label.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        entries
    }
}

/// Counters for one build pass over the corpus.
#[derive(Debug, Clone, Default)]
pub struct CorpusStats {
    /// Every scanned record, including ones that carried no training signal.
    pub total_records: usize,

    /// Trigger-phrase entries of qualifying records (empty strings included).
    pub trigger_phrase_count: usize,

    /// Semantic-tag entries of qualifying records (empty strings included).
    pub semantic_tag_count: usize,

    /// Context-type label frequencies (trigger-phrase contributions only).
    pub context_type_counts: LabelCounter,

    /// Domain label frequencies.
    pub domain_counts: LabelCounter,

    /// Temporal-class label frequencies.
    pub temporal_class_counts: LabelCounter,
}

impl CorpusStats {
    /// Label counter for the given dataset kind.
    #[must_use]
    pub const fn counts(&self, kind: DatasetKind) -> &LabelCounter {
        match kind {
            DatasetKind::ContextType => &self.context_type_counts,
            DatasetKind::Domain => &self.domain_counts,
            DatasetKind::TemporalClass => &self.temporal_class_counts,
        }
    }

    pub(crate) const fn counts_mut(&mut self, kind: DatasetKind) -> &mut LabelCounter {
        match kind {
            DatasetKind::ContextType => &mut self.context_type_counts,
            DatasetKind::Domain => &mut self.domain_counts,
            DatasetKind::TemporalClass => &mut self.temporal_class_counts,
        }
    }
}
