//! Directory operations for creating directories and refreshing file timestamps.
//!
//! This module provides idempotent directory creation with proper error
//! handling, plus a `touch` that creates or freshens a file in place.

use crate::error::SundryError;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Ensures a directory exists, creating it and all parent directories if necessary.
///
/// Calling this on an existing directory is a no-op, so repeated calls are
/// safe. A path occupied by a file fails with
/// [`SundryError::NotADirectory`].
///
/// # Arguments
///
/// * `path` - The directory path to create
///
/// # Returns
///
/// The directory path on success, so call sites can chain into path joins
/// on the freshly created directory.
///
/// # Examples
///
/// ```rust,no_run
/// use sundry::fs::ensure_dir;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// // Create nested directories
/// let output = ensure_dir(Path::new("output/reports/2026"))?;
/// std::fs::write(output.join("summary.txt"), "done")?;
/// # Ok(())
/// # }
/// ```
pub fn ensure_dir(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    } else if !path.is_dir() {
        return Err(SundryError::NotADirectory {
            path: path.display().to_string(),
        }
        .into());
    }
    Ok(path.to_path_buf())
}

/// Alias for [`ensure_dir`] matching the traditional shell spelling.
pub fn mkdir_p(path: &Path) -> Result<PathBuf> {
    ensure_dir(path)
}

/// Ensures that the parent directory of a file path exists.
///
/// This is a convenience function for creating the directory structure
/// needed for a file before writing to it. A path with no parent (root
/// level files) succeeds without doing anything.
///
/// # Examples
///
/// ```rust,no_run
/// use sundry::fs::ensure_parent_dir;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// ensure_parent_dir(Path::new("output/logs/app.log"))?;
/// std::fs::write("output/logs/app.log", "started")?;
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`ensure_dir`] for creating a specific directory
/// - [`crate::fs::atomic_write`] which calls this internally
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    Ok(())
}

/// Creates a file if missing and refreshes its timestamps, like `touch(1)`.
///
/// Existing file content is left untouched; only the access and
/// modification times move forward. Parent directories are created as
/// needed.
///
/// # Returns
///
/// The touched path on success.
///
/// # Examples
///
/// ```rust,no_run
/// use sundry::fs::touch;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// touch(Path::new("build/.stamp"))?;
/// # Ok(())
/// # }
/// ```
pub fn touch(path: &Path) -> Result<PathBuf> {
    ensure_parent_dir(path)?;

    // Append mode creates without truncating existing content.
    let file = fs::File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open for touch: {}", path.display()))?;

    let now = SystemTime::now();
    file.set_times(fs::FileTimes::new().set_accessed(now).set_modified(now))
        .with_context(|| format!("Failed to update timestamps: {}", path.display()))?;

    Ok(path.to_path_buf())
}
