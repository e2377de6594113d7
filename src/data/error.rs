use std::path::PathBuf;

use thiserror::Error;

/// Failures of the data layer. Any of these leaves the dashboard without data.
#[derive(Error, Debug)]
pub enum DataError {
    /// The CSV file could not be read.
    #[error("Failed to read {path}: {source}")]
    Fetch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the header row.
    #[error("CSV header is missing required column '{column}'")]
    Schema { column: &'static str },

    /// The text is not structurally valid CSV.
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Encoding the export document failed.
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing an export file failed.
    #[error("Failed to write {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
