//! Corpus scanner walking per-project memory directories.
//!
//! The corpus lives under a single root, one subdirectory per project, with
//! the actual memory files in `<project>/memories/*.md`. Records are
//! independent, so the parse stage runs in parallel; collection preserves
//! the directory-listing order of the file list.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::record::MemoryRecord;

/// Name of the per-project subdirectory holding memory files.
pub const MEMORIES_DIR: &str = "memories";

/// Scans `<root>/<project>/memories/*.md` into memory records.
pub struct CorpusScanner {
    root: PathBuf,
}

impl CorpusScanner {
    /// Create a scanner for the given corpus root.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory this scanner walks.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Collect every parseable memory record under the root.
    ///
    /// Files that fail to read or carry malformed front matter are logged
    /// and skipped; the scan itself never fails. A missing or unreadable
    /// root yields an empty corpus.
    #[must_use]
    pub fn scan(&self) -> Vec<MemoryRecord> {
        let files = self.collect_files();
        debug!("found {} candidate memory files", files.len());

        files
            .par_iter()
            .filter_map(|path| match MemoryRecord::parse_file(path) {
                Ok(record) => record,
                Err(e) => {
                    warn!("Error parsing {}: {e}", path.display());
                    None
                }
            })
            .collect()
    }

    /// List the `*.md` files of every project's memories directory.
    ///
    /// Projects without a `memories` subdirectory are skipped. The listing
    /// is flat: nested directories inside `memories/` are not descended.
    fn collect_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let projects = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot read corpus root {}: {e}", self.root.display());
                return files;
            }
        };

        for project in projects.flatten() {
            let memories_dir = project.path().join(MEMORIES_DIR);
            if !memories_dir.is_dir() {
                continue;
            }

            let entries = match std::fs::read_dir(&memories_dir) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Cannot read {}: {e}", memories_dir.display());
                    continue;
                }
            };

            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("md") {
                    files.push(path);
                }
            }
        }

        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_corpus() -> PathBuf {
        let root = std::env::temp_dir().join(format!("memtrain_scan_{}", uuid::Uuid::now_v7()));
        let memories = root.join("proj_a").join(MEMORIES_DIR);
        std::fs::create_dir_all(&memories).unwrap();
        std::fs::write(
            memories.join("cache_bug.md"),
            "---\ntrigger_phrases:\n  - fix the bug\ncontext_type: debug\n---\nbody\n",
        )
        .unwrap();
        std::fs::write(
            memories.join("notes.md"),
            "---\nsemantic_tags:\n  - memory-system\ncontext_type: technical\n---\n",
        )
        .unwrap();
        root
    }

    fn teardown(root: &Path) {
        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn scans_all_memory_files() {
        let root = setup_corpus();
        let records = CorpusScanner::new(&root).scan();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.source_path.extension().is_some()));
        teardown(&root);
    }

    #[test]
    fn skips_files_without_front_matter() {
        let root = setup_corpus();
        std::fs::write(
            root.join("proj_a").join(MEMORIES_DIR).join("readme.md"),
            "# Not a memory\n",
        )
        .unwrap();

        let records = CorpusScanner::new(&root).scan();
        assert_eq!(records.len(), 2);
        teardown(&root);
    }

    #[test]
    fn skips_non_markdown_files() {
        let root = setup_corpus();
        std::fs::write(
            root.join("proj_a").join(MEMORIES_DIR).join("index.json"),
            "{}",
        )
        .unwrap();

        let records = CorpusScanner::new(&root).scan();
        assert_eq!(records.len(), 2);
        teardown(&root);
    }

    #[test]
    fn skips_projects_without_memories_dir() {
        let root = setup_corpus();
        std::fs::create_dir_all(root.join("proj_b")).unwrap();
        std::fs::write(root.join("proj_b").join("stray.md"), "---\n---\n").unwrap();

        let records = CorpusScanner::new(&root).scan();
        assert_eq!(records.len(), 2);
        teardown(&root);
    }

    #[test]
    fn corrupt_file_does_not_abort_the_scan() {
        let root = setup_corpus();
        std::fs::write(
            root.join("proj_a").join(MEMORIES_DIR).join("broken.md"),
            "---\ncontext_type: [unclosed\n---\n",
        )
        .unwrap();

        let records = CorpusScanner::new(&root).scan();
        assert_eq!(records.len(), 2);
        teardown(&root);
    }

    #[test]
    fn missing_root_yields_empty_corpus() {
        let root = std::env::temp_dir().join(format!("memtrain_absent_{}", uuid::Uuid::now_v7()));
        let records = CorpusScanner::new(&root).scan();
        assert!(records.is_empty());
    }

    #[test]
    fn multiple_projects_are_merged() {
        let root = setup_corpus();
        let memories = root.join("proj_c").join(MEMORIES_DIR);
        std::fs::create_dir_all(&memories).unwrap();
        std::fs::write(
            memories.join("pref.md"),
            "---\ntrigger_phrases:\n  - dark mode\ncontext_type: preference\n---\n",
        )
        .unwrap();

        let records = CorpusScanner::new(&root).scan();
        assert_eq!(records.len(), 3);
        teardown(&root);
    }
}
