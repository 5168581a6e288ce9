//! Error types for source table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the source tables.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Polars could not parse the value table.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// A metadata record could not be decoded.
    #[error("invalid record in {path}: {source}")]
    Record {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column the dashboard relies on is absent.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;

pub(crate) fn check_readable(path: &std::path::Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Strips a UTF-8 BOM and surrounding whitespace from a header cell.
pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}
