//! Memory record types parsed from Markdown memory files.
//!
//! A memory file is a Markdown document whose first line opens a YAML
//! front-matter header. The header carries the classification metadata
//! (trigger phrases, semantic tags, label fields); everything after the
//! closing delimiter is the free-text body.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Marker line separating the YAML front matter from the document body.
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// Typed view of a memory file's YAML front matter.
///
/// Every field is optional and defaults to empty; unknown keys are ignored.
/// A header that does not deserialize into this shape (e.g. a bare scalar,
/// or a string where a list is expected) is a parse failure and the file is
/// excluded from the corpus.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Frontmatter {
    /// Example user queries that should activate this memory.
    #[serde(default)]
    pub trigger_phrases: Vec<String>,

    /// Short topical labels, secondary to trigger phrases.
    #[serde(default)]
    pub semantic_tags: Vec<String>,

    /// Interaction category (e.g. "debug", "architecture", "decision").
    #[serde(default)]
    pub context_type: String,

    /// Subject-matter area of the memory.
    #[serde(default)]
    pub domain: String,

    /// Recency/durability bucket (e.g. `eternal`, `long_term`).
    #[serde(default)]
    pub temporal_class: String,
}

impl Frontmatter {
    /// Whether this record carries any training signal at all.
    ///
    /// Records with neither trigger phrases nor semantic tags contribute
    /// nothing to any dataset or counter.
    #[must_use]
    pub fn has_training_signal(&self) -> bool {
        !self.trigger_phrases.is_empty() || !self.semantic_tags.is_empty()
    }
}

/// One parsed memory file. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRecord {
    /// Parsed front-matter header.
    pub frontmatter: Frontmatter,

    /// Free-text body after the closing delimiter, trimmed.
    pub body: String,

    /// Path the record was read from.
    pub source_path: PathBuf,
}

impl MemoryRecord {
    /// Parse a memory Markdown file with YAML front matter.
    ///
    /// Returns `Ok(None)` for files that are not memory files at all: no
    /// leading delimiter, or a header that is never closed. Read failures
    /// and malformed YAML are reported as errors so the caller can log the
    /// file and move on.
    pub fn parse_file(path: &Path) -> Result<Option<Self>> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Option<Self>> {
        if !content.starts_with(FRONT_MATTER_DELIMITER) {
            return Ok(None);
        }

        // Preamble (empty), header, body. A body containing the delimiter
        // stays intact because the split stops after the header.
        let mut parts = content.splitn(3, FRONT_MATTER_DELIMITER);
        let (Some(_), Some(header), Some(body)) = (parts.next(), parts.next(), parts.next())
        else {
            return Ok(None);
        };

        let frontmatter =
            serde_yaml::from_str(header).map_err(|source| Error::FrontMatter {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Some(Self {
            frontmatter,
            body: body.trim().to_string(),
            source_path: path.to_path_buf(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "---\n\
trigger_phrases:\n  - fix the bug\n  - bug fix\n\
semantic_tags:\n  - memory-system\n\
context_type: debug\n\
domain: embeddings\n\
temporal_class: long_term\n\
---\n\nThe session where the embedding cache bug was found.\n";

    #[test]
    fn parses_full_front_matter() {
        let record = MemoryRecord::parse(SAMPLE, Path::new("a.md")).unwrap().unwrap();

        assert_eq!(record.frontmatter.trigger_phrases, vec!["fix the bug", "bug fix"]);
        assert_eq!(record.frontmatter.semantic_tags, vec!["memory-system"]);
        assert_eq!(record.frontmatter.context_type, "debug");
        assert_eq!(record.frontmatter.domain, "embeddings");
        assert_eq!(record.frontmatter.temporal_class, "long_term");
        assert_eq!(
            record.body,
            "The session where the embedding cache bug was found."
        );
        assert_eq!(record.source_path, PathBuf::from("a.md"));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let content = "---\ncontext_type: decision\n---\nbody\n";
        let record = MemoryRecord::parse(content, Path::new("b.md")).unwrap().unwrap();

        assert!(record.frontmatter.trigger_phrases.is_empty());
        assert!(record.frontmatter.semantic_tags.is_empty());
        assert_eq!(record.frontmatter.context_type, "decision");
        assert_eq!(record.frontmatter.domain, "");
        assert_eq!(record.frontmatter.temporal_class, "");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let content = "---\ncontext_type: debug\ncreated_by: someone\npriority: 3\n---\n";
        let record = MemoryRecord::parse(content, Path::new("c.md")).unwrap().unwrap();
        assert_eq!(record.frontmatter.context_type, "debug");
    }

    #[test]
    fn file_without_leading_delimiter_is_not_a_memory() {
        let content = "# Just a readme\n\nNo front matter here.\n";
        assert!(MemoryRecord::parse(content, Path::new("d.md")).unwrap().is_none());
    }

    #[test]
    fn unterminated_header_is_not_a_memory() {
        let content = "---\ncontext_type: debug\n";
        assert!(MemoryRecord::parse(content, Path::new("e.md")).unwrap().is_none());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let content = "---\ncontext_type: [unclosed\n---\nbody\n";
        assert!(MemoryRecord::parse(content, Path::new("f.md")).is_err());
    }

    #[test]
    fn scalar_header_is_an_error() {
        // A header that is valid YAML but not a mapping.
        let content = "---\njust a string\n---\nbody\n";
        assert!(MemoryRecord::parse(content, Path::new("g.md")).is_err());
    }

    #[test]
    fn delimiter_inside_body_is_preserved() {
        let content = "---\ncontext_type: debug\n---\nfirst\n---\nsecond\n";
        let record = MemoryRecord::parse(content, Path::new("h.md")).unwrap().unwrap();
        assert_eq!(record.body, "first\n---\nsecond");
    }

    #[test]
    fn training_signal_requires_phrases_or_tags() {
        let mut fm = Frontmatter::default();
        assert!(!fm.has_training_signal());

        fm.semantic_tags.push("memory-system".to_string());
        assert!(fm.has_training_signal());

        fm.semantic_tags.clear();
        fm.trigger_phrases.push("fix the bug".to_string());
        assert!(fm.has_training_signal());
    }
}
