//! Sample table ingestion.
//!
//! Loads a delimited text table (tab-separated by default) into a
//! [`ena_model::SampleTable`]: first line as header, one sample per line.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ena_ingest::{IngestOptions, read_sample_table};
//!
//! let table = read_sample_table(Path::new("samples.tsv"), &IngestOptions::default())?;
//! ```

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Reading ===
pub use reader::{DEFAULT_DELIMITER, IngestOptions, read_sample_table};
