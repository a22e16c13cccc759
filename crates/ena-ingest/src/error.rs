//! Error types for sample table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a sample table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Table file does not exist.
    #[error("{path} not found")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the table file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// The csv reader rejected a record.
    #[error("failed to parse {path} at line {}: {message}", line_label(.line))]
    Parse {
        path: PathBuf,
        line: Option<u64>,
        message: String,
    },

    /// The file has no header line.
    #[error("table is empty: {path}")]
    EmptyTable { path: PathBuf },

    /// A header cell is blank.
    #[error("column {index} has an empty header in {path}")]
    EmptyHeader { path: PathBuf, index: usize },
}

fn line_label(line: &Option<u64>) -> String {
    line.map_or_else(|| "?".to_string(), |line| line.to_string())
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/samples.tsv"),
        };
        assert_eq!(err.to_string(), "/path/to/samples.tsv not found");
    }

    #[test]
    fn test_parse_error_without_line() {
        let err = IngestError::Parse {
            path: PathBuf::from("samples.tsv"),
            line: None,
            message: "invalid UTF-8".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse samples.tsv at line ?: invalid UTF-8"
        );
    }
}
