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

mod error;
mod record;
mod scanner;

pub use error::{Error, Result};
pub use record::{FRONT_MATTER_DELIMITER, Frontmatter, MemoryRecord};
pub use scanner::{CorpusScanner, MEMORIES_DIR};
