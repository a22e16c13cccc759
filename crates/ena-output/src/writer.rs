//! Writing the sample set to disk.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{OutputError, Result};
use crate::pretty::pretty_print;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "sample.xml";

/// Ensure a parent directory exists for a file path.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Pretty-print `document` and write it to `path` as UTF-8.
pub fn write_sample_set(path: &Path, document: &str) -> Result<()> {
    let pretty = pretty_print(document)?;
    ensure_parent_dir(path)?;
    fs::write(path, pretty.as_bytes()).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = pretty.len(), "wrote sample set");
    Ok(())
}
