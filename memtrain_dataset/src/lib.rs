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

mod builder;
mod example;
mod stats;
mod writer;

pub use builder::build_datasets;
pub use example::{DatasetCollection, DatasetKind, TrainingExample, normalize_tag};
pub use stats::{CorpusStats, LabelCounter};
pub use writer::{WriteError, json_path, jsonl_path, write_datasets};
