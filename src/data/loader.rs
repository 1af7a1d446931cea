//! Dataset loading utilities
//!
//! `DatasetLoader` is a read-only handle on a CSV dataset: a base directory
//! plus a dataset file name, fixed at construction. Every call to [`load`]
//! re-reads the file from disk; nothing is cached between calls.
//!
//! [`load`]: DatasetLoader::load

use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

use super::error::DataResult;
use super::table::Table;

/// Loader for a CSV dataset under a fixed base directory
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    base_dir: PathBuf,
    dataset_path: PathBuf,
}

impl DatasetLoader {
    /// Create a loader for `dataset_path` relative to `base_dir`
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(base_dir: P, dataset_path: Q) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            dataset_path: dataset_path.as_ref().to_path_buf(),
        }
    }

    /// Directory that holds the dataset and all evaluation outputs
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Full path to the dataset file
    pub fn dataset_file(&self) -> PathBuf {
        self.base_dir.join(&self.dataset_path)
    }

    /// Load the dataset fresh from disk
    pub fn load(&self) -> DataResult<Table> {
        let path = self.dataset_file();
        let file = File::open(&path)?;
        let table = Table::from_reader(file)?;

        info!(
            "Loaded {} rows x {} columns from {:?}",
            table.n_rows(),
            table.headers().len(),
            path
        );

        Ok(table)
    }
}
