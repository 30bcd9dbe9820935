//! Atomic file copy with metadata preservation.
//!
//! Copies stage their payload next to the destination and reach the final
//! path only through a rename, mirroring the write strategy in
//! [`crate::fs::atomic_write`].

use crate::error::SundryError;
use crate::fs::atomic::staging_path;
use crate::fs::dirs::ensure_parent_dir;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Atomically copies a regular file, preserving permissions and timestamps.
///
/// The copy proceeds as:
/// 1. Verify the source is an existing regular file
/// 2. Copy content into a staging file next to the destination
/// 3. Replay the source's access and modification times onto the staging file
/// 4. Sync, then atomically rename the staging file to the destination
///
/// A destination that already exists is replaced in one step; readers never
/// observe a partially copied file. Permission bits travel with the content
/// copy itself.
///
/// # Arguments
///
/// * `src` - The source file to copy, which must be a regular file
/// * `dst` - The destination path, replaced atomically if present
///
/// # Returns
///
/// The destination path on success.
///
/// # Errors
///
/// Returns [`SundryError::SourceNotFound`] when `src` is missing or not a
/// regular file. In that case nothing is created at or near `dst`, not even
/// its parent directory.
///
/// # Examples
///
/// ```rust,no_run
/// use sundry::fs::copy_file_atomic;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let installed = copy_file_atomic(
///     Path::new("dist/tool.cfg"),
///     Path::new("deploy/current/tool.cfg"),
/// )?;
/// println!("installed at {}", installed.display());
/// # Ok(())
/// # }
/// ```
pub fn copy_file_atomic(src: &Path, dst: &Path) -> Result<PathBuf> {
    if !src.is_file() {
        return Err(SundryError::SourceNotFound {
            path: src.display().to_string(),
        }
        .into());
    }

    ensure_parent_dir(dst)?;

    let staging = staging_path(dst);

    // fs::copy carries the permission bits along with the content.
    fs::copy(src, &staging).with_context(|| {
        format!(
            "Failed to copy {} to staging file {}",
            src.display(),
            staging.display()
        )
    })?;

    replay_timestamps(src, &staging)
        .with_context(|| format!("Failed to preserve timestamps from {}", src.display()))?;

    fs::rename(&staging, dst)
        .with_context(|| format!("Failed to rename staging file to: {}", dst.display()))?;

    Ok(dst.to_path_buf())
}

/// Copies `src`'s access and modification times onto `staged`, then syncs.
fn replay_timestamps(src: &Path, staged: &Path) -> Result<()> {
    let metadata = fs::metadata(src)
        .with_context(|| format!("Failed to read metadata for {}", src.display()))?;
    let accessed = metadata
        .accessed()
        .with_context(|| format!("Access time unavailable for {}", src.display()))?;
    let modified = metadata
        .modified()
        .with_context(|| format!("Modification time unavailable for {}", src.display()))?;

    let file = fs::File::options()
        .write(true)
        .open(staged)
        .with_context(|| format!("Failed to reopen staging file {}", staged.display()))?;
    file.set_times(fs::FileTimes::new().set_accessed(accessed).set_modified(modified))
        .with_context(|| format!("Failed to set timestamps on {}", staged.display()))?;
    file.sync_all()
        .with_context(|| format!("Failed to sync staging file {}", staged.display()))?;

    Ok(())
}
