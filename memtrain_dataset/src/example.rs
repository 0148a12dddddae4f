//! Training example and dataset types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One label/text pair for classifier training.
///
/// Examples have no identity beyond structural equality; duplicates are
/// permitted and never merged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingExample {
    /// Input text: a trigger phrase or a normalized semantic tag.
    pub text: String,

    /// Target label, taken verbatim from a record's label field.
    pub label: String,
}

impl TrainingExample {
    /// Create a new training example.
    #[must_use]
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// The classifier a dataset trains, doubling as the dataset name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// Interaction category: debug, technical, decision, architecture, ...
    ContextType,
    /// Subject-matter area.
    Domain,
    /// Recency/durability bucket.
    TemporalClass,
}

impl DatasetKind {
    /// All dataset kinds, in output order.
    pub const ALL: [Self; 3] = [Self::ContextType, Self::Domain, Self::TemporalClass];

    /// Returns the string representation of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::ContextType => "context_type",
            Self::Domain => "domain",
            Self::TemporalClass => "temporal_class",
        }
    }
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "context_type" => Ok(Self::ContextType),
            "domain" => Ok(Self::Domain),
            "temporal_class" => Ok(Self::TemporalClass),
            _ => Err("unknown dataset kind"),
        }
    }
}

/// The three training datasets, each in emission order.
///
/// Emission order is record-scan order with trigger-phrase examples before
/// tag-derived ones; scan order itself is not stable across runs.
#[derive(Debug, Clone, Default)]
pub struct DatasetCollection {
    context_type: Vec<TrainingExample>,
    domain: Vec<TrainingExample>,
    temporal_class: Vec<TrainingExample>,
}

impl DatasetCollection {
    /// Examples of the given dataset.
    #[must_use]
    pub fn get(&self, kind: DatasetKind) -> &[TrainingExample] {
        match kind {
            DatasetKind::ContextType => &self.context_type,
            DatasetKind::Domain => &self.domain,
            DatasetKind::TemporalClass => &self.temporal_class,
        }
    }

    /// Append an example to the given dataset.
    pub(crate) fn push(&mut self, kind: DatasetKind, example: TrainingExample) {
        match kind {
            DatasetKind::ContextType => self.context_type.push(example),
            DatasetKind::Domain => self.domain.push(example),
            DatasetKind::TemporalClass => self.temporal_class.push(example),
        }
    }

    /// Iterate the datasets in output order.
    pub fn iter(&self) -> impl Iterator<Item = (DatasetKind, &[TrainingExample])> {
        DatasetKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Total number of examples across all datasets.
    #[must_use]
    pub fn total_examples(&self) -> usize {
        self.context_type.len() + self.domain.len() + self.temporal_class.len()
    }
}

/// Presentational normalization for semantic tags: hyphens become spaces so
/// a tag reads like a short user query ("memory-system" -> "memory system").
/// Only hyphens are touched; the function is idempotent.
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    tag.replace('-', " ")
}
