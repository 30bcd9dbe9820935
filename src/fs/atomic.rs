//! Atomic file write operations using stage-and-rename strategy.
//!
//! This module provides safe, atomic file writing that prevents corruption
//! from interrupted writes. Content lands in a staging file next to the
//! target and only reaches the target path through [`std::fs::rename`].

use crate::fs::dirs::ensure_parent_dir;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Newline style applied when a write normalizes line endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix style (`\n`)
    Lf,
    /// Windows style (`\r\n`)
    CrLf,
    /// Whatever the compilation target uses natively
    Native,
}

impl LineEnding {
    /// The literal terminator this style writes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }
}

/// Options controlling how [`safe_write_text`] renders its payload.
///
/// The default performs no newline translation: the text is written byte
/// for byte as provided.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// When set, every line break in the input (`\n`, `\r\n`, or a lone
    /// `\r`) is rewritten to this style before the write.
    pub newline: Option<LineEnding>,
}

/// Safely writes a string to a file using atomic operations.
///
/// This is a convenience wrapper around [`atomic_write`] that handles
/// newline normalization per [`WriteOptions`]. The write is atomic, meaning
/// the file either contains the new content or the old content, never a
/// partial write.
///
/// # Arguments
///
/// * `path` - The file path to write to
/// * `contents` - The string content to write
/// * `options` - Newline handling for the payload
///
/// # Returns
///
/// The target path on success, so call sites can chain into further
/// operations on the written file.
///
/// # Examples
///
/// ```rust,no_run
/// use sundry::fs::{LineEnding, WriteOptions, safe_write_text};
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let written = safe_write_text(
///     Path::new("notes.txt"),
///     "alpha\r\nbeta\n",
///     WriteOptions { newline: Some(LineEnding::Lf) },
/// )?;
/// assert_eq!(written, Path::new("notes.txt"));
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`atomic_write`] for writing raw bytes
/// - [`crate::fs::copy_file_atomic`] for atomic file copies
pub fn safe_write_text(path: &Path, contents: &str, options: WriteOptions) -> Result<PathBuf> {
    match options.newline {
        Some(ending) => atomic_write(path, normalize_newlines(contents, ending.as_str()).as_bytes())?,
        None => atomic_write(path, contents.as_bytes())?,
    }
    Ok(path.to_path_buf())
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// This function ensures atomic writes by:
/// 1. Writing content to a staging file next to the target
/// 2. Syncing the staging file to disk
/// 3. Atomically renaming the staging file to the target path
///
/// The staging name is the full target file name with `.tmp` appended, so
/// `report.txt` stages as `report.txt.tmp` and the real extension survives
/// for any tooling that inspects in-flight files.
///
/// # Arguments
///
/// * `path` - The target file path
/// * `content` - The raw bytes to write
///
/// # Guarantees
///
/// - **Atomicity**: Readers never observe a partially written target
/// - **Durability**: Content is synced to disk before the rename
/// - **Safety**: Parent directories are created automatically
///
/// # Examples
///
/// ```rust,no_run
/// use sundry::fs::atomic_write;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// atomic_write(Path::new("state.json"), b"{\"ready\": true}")?;
/// # Ok(())
/// # }
/// ```
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    use std::io::Write;

    ensure_parent_dir(path)?;

    let staging = staging_path(path);

    {
        let mut file = fs::File::create(&staging).with_context(|| {
            format!("Failed to create staging file: {}", staging.display())
        })?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to staging file: {}", staging.display()))?;

        file.sync_all()
            .with_context(|| format!("Failed to sync staging file: {}", staging.display()))?;
    }

    // Atomic rename
    fs::rename(&staging, path)
        .with_context(|| format!("Failed to rename staging file to: {}", path.display()))?;

    Ok(())
}

/// Staging sibling for `target`: the full file name with `.tmp` appended.
pub(crate) fn staging_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map_or_else(OsString::new, OsString::from);
    name.push(".tmp");
    target.with_file_name(name)
}

/// Rewrites every line break in `text` to `newline`.
///
/// A `\r\n` pair counts as a single break. Lone `\r` and lone `\n` are each
/// treated as breaks as well, matching universal-newline readers.
fn normalize_newlines(text: &str, newline: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str(newline);
            }
            '\n' => out.push_str(newline),
            other => out.push(other),
        }
    }
    out
}
