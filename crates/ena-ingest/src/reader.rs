//! Delimited table reading.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use ena_model::{Row, SampleTable};

use crate::error::{IngestError, Result};

/// Tab, the delimiter of the sample sheets this tool was written for.
pub const DEFAULT_DELIMITER: u8 = b'\t';

/// Options for reading a sample table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|value| value.trim().is_empty())
}

fn parse_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::Parse {
        path: path.to_path_buf(),
        line: error.position().map(csv::Position::line),
        message: error.to_string(),
    }
}

/// Read a delimited sample table.
///
/// The first non-blank line is the header. Header names are trimmed; cell
/// values are kept verbatim. Rows whose field count differs from the header
/// are kept as-is so the caller can decide how to treat them.
pub fn read_sample_table(path: &Path, options: &IngestOptions) -> Result<SampleTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| match error.into_kind() {
            csv::ErrorKind::Io(source) => IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            },
            other => IngestError::Parse {
                path: path.to_path_buf(),
                line: None,
                message: format!("{other:?}"),
            },
        })?;

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| parse_error(path, &error))?;
        if is_blank(&record) {
            continue;
        }
        let line = record.position().map_or(0, csv::Position::line);
        match headers {
            None => {
                let names: Vec<String> = record.iter().map(normalize_header).collect();
                if let Some(index) = names.iter().position(String::is_empty) {
                    return Err(IngestError::EmptyHeader {
                        path: path.to_path_buf(),
                        index,
                    });
                }
                debug!(line, columns = names.len(), "read header");
                headers = Some(names);
            }
            Some(_) => {
                rows.push(Row::new(line, record.iter().map(str::to_string).collect()));
            }
        }
    }

    let Some(headers) = headers else {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    };
    info!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "loaded sample table"
    );
    Ok(SampleTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_header_strips_bom_and_space() {
        assert_eq!(normalize_header("\u{feff}name "), "name");
        assert_eq!(normalize_header("  depth_m"), "depth_m");
    }

    #[test]
    fn default_delimiter_is_tab() {
        assert_eq!(IngestOptions::default().delimiter, b'\t');
        assert_eq!(IngestOptions::default().with_delimiter(b',').delimiter, b',');
    }
}
