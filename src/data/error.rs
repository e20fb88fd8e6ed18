use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while turning a file into a [`Dataset`].
///
/// Loading is all-or-nothing: a single bad row fails the whole file.
///
/// [`Dataset`]: super::model::Dataset
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("unexpected file layout: {0}")]
    Format(String),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed Parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("unreadable Arrow column: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("dataset contains no launch records")]
    NoRecords,
}

impl DataLoadError {
    pub(crate) fn row(row: usize, reason: impl Into<String>) -> Self {
        DataLoadError::MalformedRow {
            row,
            reason: reason.into(),
        }
    }
}
