//! Evaluation records and the cumulative results log
//!
//! Every evaluation appends one row to a shared `evaluation-results.csv`.
//! The header is written only when the file is first created, so repeated
//! runs accumulate rows under a single header.

use serde::Serialize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::data::DataResult;

/// Round a metric to exactly 4 decimal places
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// One evaluated model: accuracy and weighted precision/recall/F1
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRecord {
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Accuracy")]
    pub accuracy: f64,
    #[serde(rename = "Precision")]
    pub precision: f64,
    #[serde(rename = "Recall")]
    pub recall: f64,
    #[serde(rename = "F1")]
    pub f1: f64,
}

impl EvaluationRecord {
    /// Build a record, rounding every metric to 4 decimal places
    pub fn new(model: &str, accuracy: f64, precision: f64, recall: f64, f1: f64) -> Self {
        Self {
            model: model.to_string(),
            accuracy: round4(accuracy),
            precision: round4(precision),
            recall: round4(recall),
            f1: round4(f1),
        }
    }
}

/// Append-only CSV log of evaluation records
///
/// Appends are plain file appends with no locking; concurrent writers are
/// not coordinated.
#[derive(Debug, Clone)]
pub struct ResultsLog {
    path: PathBuf,
}

impl ResultsLog {
    /// Create a log handle for `path`; the file itself is created lazily
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the underlying CSV file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, writing the header row only if the file is new
    pub fn append(&self, record: &EvaluationRecord) -> DataResult<()> {
        let write_header = !self.path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);

        writer.serialize(record)?;
        writer.flush()?;

        info!("Appended results for {} to {:?}", record.model, self.path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_round4() {
        assert!((round4(0.123456) - 0.1235).abs() < 1e-12);
        assert!((round4(1.0) - 1.0).abs() < 1e-12);
        assert!((round4(0.66665) - 0.6667).abs() < 1e-12);
    }

    #[test]
    fn test_record_rounds_metrics() {
        let record = EvaluationRecord::new("gpt-4o", 0.987654, 0.123449, 0.5, 1.0);
        assert!((record.accuracy - 0.9877).abs() < 1e-12);
        assert!((record.precision - 0.1234).abs() < 1e-12);
        assert!((record.recall - 0.5).abs() < 1e-12);
        assert!((record.f1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_append_writes_header_once() {
        let dir = tempdir().unwrap();
        let log = ResultsLog::new(dir.path().join("evaluation-results.csv"));

        let first = EvaluationRecord::new("model-a", 0.9, 0.8, 0.7, 0.75);
        let second = EvaluationRecord::new("model-b", 0.95, 0.9, 0.85, 0.87);
        log.append(&first).unwrap();
        log.append(&second).unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Model,Accuracy,Precision,Recall,F1");
        assert!(lines[1].starts_with("model-a,"));
        assert!(lines[2].starts_with("model-b,"));
    }

    #[test]
    fn test_append_to_existing_file_skips_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("evaluation-results.csv");
        fs::write(&path, "Model,Accuracy,Precision,Recall,F1\nold,1.0,1.0,1.0,1.0\n").unwrap();

        let log = ResultsLog::new(&path);
        log.append(&EvaluationRecord::new("new", 0.5, 0.5, 0.5, 0.5))
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("Model,Accuracy").count(), 1);
        assert_eq!(contents.lines().count(), 3);
    }
}
