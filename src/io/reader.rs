//! Reading sources and writing generated artifacts.

use crate::error::{Error, IoError, Result};
use std::path::Path;

/// Reads a UTF-8 source file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the path does not exist and
/// [`IoError::ReadFailed`] if it cannot be read or is not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use literate_rs::io::read_file;
///
/// let content = read_file("example.jl").unwrap();
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if !path_ref.exists() {
        return Err(IoError::FileNotFound { path: path_str }.into());
    }

    std::fs::read_to_string(path_ref).map_err(|e| {
        IoError::ReadFailed {
            path: path_str,
            reason: e.to_string(),
        }
        .into()
    })
}

/// Checks that `dir` is an existing directory.
///
/// Output directories are never created implicitly.
///
/// # Errors
///
/// Returns [`Error::Config`] if `dir` is missing or not a directory.
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    if dir.is_dir() {
        Ok(())
    } else {
        Err(Error::config(format!("not a directory: {}", dir.display())))
    }
}

/// Writes content to a file, replacing any existing file.
///
/// # Errors
///
/// Returns [`IoError::WriteFailed`] if the file cannot be written.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path_ref = path.as_ref();

    std::fs::write(path_ref, content).map_err(|e| IoError::WriteFailed {
        path: path_ref.to_string_lossy().to_string(),
        reason: e.to_string(),
    })?;

    Ok(())
}

/// Removes a directory tree, ignoring every failure.
pub fn remove_dir_quietly<P: AsRef<Path>>(dir: P) {
    let dir = dir.as_ref();
    if let Err(e) = std::fs::remove_dir_all(dir) {
        tracing::debug!(path = %dir.display(), error = %e, "cleanup skipped");
    }
}
