//! CSV Data Loader Module
//! Reads the OHLC CSV file with Polars. Every call re-reads the file from disk.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV {path}: {source}")]
    CsvError {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
}

/// Handles CSV file loading with Polars.
///
/// The loader only remembers the path; it never holds on to a `DataFrame`
/// between calls, so an edited file is picked up on the next load.
#[derive(Debug, Clone)]
pub struct DataLoader {
    file_path: PathBuf,
}

impl DataLoader {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Load the CSV file using Polars.
    ///
    /// Cells that fail type inference become nulls instead of aborting the
    /// whole read.
    pub fn load_csv(&self) -> Result<DataFrame, LoaderError> {
        LazyCsvReader::new(&self.file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(|source| LoaderError::CsvError {
                path: self.file_path.clone(),
                source,
            })
    }

    /// Get file path.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

/// Get list of column names from a loaded DataFrame, in file order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}
