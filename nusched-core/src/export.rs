//! Atomic file writes for exported calendars and saved responses.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::error::{NuSchedError, NuSchedResult};

/// Write `content` to `path` atomically and return the absolute path.
///
/// The text goes to a temporary file next to the destination, which is then
/// renamed over it, so a failed export never leaves a partial file behind.
pub fn write_atomic(path: &Path, content: &str) -> NuSchedResult<PathBuf> {
    let write_err = |source: std::io::Error| NuSchedError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut file = NamedTempFile::new_in(&dir).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    let absolute = std::path::absolute(path).map_err(write_err)?;
    debug!("Wrote {} bytes to {}", content.len(), absolute.display());
    Ok(absolute)
}
