use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Writing events for a sample failed.
    #[error("failed to serialize sample '{alias}': {message}")]
    Serialization { alias: String, message: String },

    /// Input markup could not be read.
    #[error("malformed markup at byte {position}: {message}")]
    Markup { position: u64, message: String },

    /// A per-sample document cannot be placed in the sample set.
    #[error("sample document {index} is not a valid fragment: {reason}")]
    Fragment { index: usize, reason: String },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
