//! Dataset serialization to JSON and JSONL files.
//!
//! Each dataset is written twice: `<name>_train.json` holds a single
//! pretty-printed array, `<name>_train.jsonl` one compact object per line
//! (the common format for training pipelines).

use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::example::{DatasetCollection, DatasetKind, TrainingExample};

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Path of a dataset's JSON array file inside `dir`.
#[must_use]
pub fn json_path(dir: &Path, kind: DatasetKind) -> PathBuf {
    dir.join(format!("{}_train.json", kind.as_str()))
}

/// Path of a dataset's line-delimited file inside `dir`.
#[must_use]
pub fn jsonl_path(dir: &Path, kind: DatasetKind) -> PathBuf {
    dir.join(format!("{}_train.jsonl", kind.as_str()))
}

/// Write every dataset to `dir` as JSON and JSONL, creating the directory
/// if needed. Returns the written paths in output order (all JSON files
/// first, then all JSONL files).
pub fn write_datasets(
    datasets: &DatasetCollection,
    dir: &Path,
) -> Result<Vec<PathBuf>, WriteError> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(DatasetKind::ALL.len() * 2);
    for (kind, examples) in datasets.iter() {
        written.push(write_json(examples, json_path(dir, kind))?);
    }
    for (kind, examples) in datasets.iter() {
        written.push(write_jsonl(examples, jsonl_path(dir, kind))?);
    }

    info!("wrote {} dataset files to {}", written.len(), dir.display());
    Ok(written)
}

fn write_json(examples: &[TrainingExample], path: PathBuf) -> Result<PathBuf, WriteError> {
    let file = std::fs::File::create(&path)?;
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, examples)?;
    writer.flush()?;
    Ok(path)
}

fn write_jsonl(examples: &[TrainingExample], path: PathBuf) -> Result<PathBuf, WriteError> {
    let file = std::fs::File::create(&path)?;
    let mut writer = std::io::BufWriter::new(file);
    for example in examples {
        serde_json::to_writer(&mut writer, example)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::example::TrainingExample;

    fn sample_datasets() -> DatasetCollection {
        let mut datasets = DatasetCollection::default();
        datasets.push(
            DatasetKind::ContextType,
            TrainingExample::new("fix the bug", "debug"),
        );
        datasets.push(
            DatasetKind::ContextType,
            TrainingExample::new("memory system", "debug"),
        );
        datasets.push(
            DatasetKind::Domain,
            TrainingExample::new("fix the bug", "embeddings"),
        );
        datasets
    }

    fn temp_output_dir() -> PathBuf {
        std::env::temp_dir().join(format!("memtrain_write_{}", uuid::Uuid::now_v7()))
    }

    #[test]
    fn test_writes_one_file_pair_per_dataset() {
        let dir = temp_output_dir();
        let written = write_datasets(&sample_datasets(), &dir).unwrap();

        assert_eq!(written.len(), 6);
        for kind in DatasetKind::ALL {
            assert!(json_path(&dir, kind).is_file());
            assert!(jsonl_path(&dir, kind).is_file());
        }
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_json_file_parses_back_to_the_dataset() {
        let dir = temp_output_dir();
        let datasets = sample_datasets();
        write_datasets(&datasets, &dir).unwrap();

        let content = std::fs::read_to_string(json_path(&dir, DatasetKind::ContextType)).unwrap();
        let parsed: Vec<TrainingExample> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, datasets.get(DatasetKind::ContextType));

        // Pretty output, one field per line.
        assert!(content.contains("\n  {"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_jsonl_round_trips_line_by_line() {
        let dir = temp_output_dir();
        let datasets = sample_datasets();
        write_datasets(&datasets, &dir).unwrap();

        let content = std::fs::read_to_string(jsonl_path(&dir, DatasetKind::ContextType)).unwrap();
        let parsed: Vec<TrainingExample> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(parsed, datasets.get(DatasetKind::ContextType));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_empty_dataset_writes_empty_array_and_no_lines() {
        let dir = temp_output_dir();
        write_datasets(&sample_datasets(), &dir).unwrap();

        let json = std::fs::read_to_string(json_path(&dir, DatasetKind::TemporalClass)).unwrap();
        assert_eq!(json, "[]");

        let jsonl = std::fs::read_to_string(jsonl_path(&dir, DatasetKind::TemporalClass)).unwrap();
        assert!(jsonl.is_empty());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_names_follow_dataset_names() {
        let dir = PathBuf::from("out");
        assert_eq!(
            json_path(&dir, DatasetKind::Domain),
            PathBuf::from("out/domain_train.json")
        );
        assert_eq!(
            jsonl_path(&dir, DatasetKind::TemporalClass),
            PathBuf::from("out/temporal_class_train.jsonl")
        );
    }
}
