//! Conversion error types.

use std::path::PathBuf;

/// Everything that can stop a conversion. All variants are fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input CSV does not exist.
    #[error("Input file not found: {}", path.display())]
    InputNotFound {
        /// Path that was opened.
        path: PathBuf,
    },

    /// The input CSV exists but could not be read as UTF-8 text.
    #[error("Failed to read input file {}: {source}", path.display())]
    InputRead {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The header row lacks one of the required columns.
    #[error("Missing required column '{column}' in CSV header")]
    MissingColumn {
        /// Header name that was expected.
        column: String,
    },

    /// A data row ended before a required column.
    #[error("Row {row} has no value for column '{column}'")]
    ShortRow {
        /// 1-based data row number (header excluded).
        row: usize,
        /// Header name whose cell is absent.
        column: String,
    },

    /// Malformed CSV that the reader itself rejects.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// The export name cannot be used in an `export const` statement.
    #[error(transparent)]
    ExportName(#[from] rvw_core::CoreError),

    /// JSON serialization failed.
    #[error("Failed to render JSON: {0}")]
    Render(#[from] serde_json::Error),

    /// The output module could not be written.
    #[error("Failed to write output file {}: {source}", path.display())]
    OutputWriteFailure {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
