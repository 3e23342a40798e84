//! Atomic card publication.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{CardError, Result};

/// Write `content` to `path` so readers never observe a partial file.
///
/// The document goes to a temporary file in the destination directory and is
/// then renamed over `path`. On error the temporary file is removed and any
/// existing file at `path` is left as it was.
///
/// # Errors
/// Returns [`CardError::FileWrite`] if the directory, temp file or rename fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_write = |source| CardError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(file_write)?;

    let mut temp = NamedTempFile::new_in(dir).map_err(file_write)?;
    temp.write_all(content.as_bytes()).map_err(file_write)?;
    temp.as_file().sync_all().map_err(file_write)?;
    temp.persist(path).map_err(|e| file_write(e.error))?;

    Ok(())
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
