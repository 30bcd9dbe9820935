//! Error handling for sundry
//!
//! This module provides the typed error enum shared by all sundry operations.
//! Fallible functions return [`anyhow::Result`] so callers get rich context
//! chains, while the underlying [`SundryError`] stays recoverable through
//! [`anyhow::Error::downcast_ref`].
//!
//! # Error Categories
//!
//! - **File System**: [`SundryError::SourceNotFound`], [`SundryError::NotADirectory`],
//!   [`SundryError::Io`]
//! - **Invalid Arguments**: [`SundryError::InvalidSize`], [`SundryError::EmptyCompose`]
//!
//! # Examples
//!
//! ```rust
//! use sundry::error::SundryError;
//! use sundry::iter::chunked;
//!
//! let result = chunked(vec![1, 2, 3], 0);
//! let error = result.err().unwrap();
//! assert!(matches!(
//!     error.downcast_ref::<SundryError>(),
//!     Some(SundryError::InvalidSize { .. })
//! ));
//! ```

use thiserror::Error;

/// The error type for sundry operations
///
/// Each variant represents a specific failure mode so callers can match on
/// the cause instead of parsing message strings. I/O failures raised inside
/// higher-level operations are wrapped with path context via [`anyhow`];
/// the [`Io`](Self::Io) variant covers direct conversions from
/// [`std::io::Error`].
#[derive(Error, Debug)]
pub enum SundryError {
    /// Source file missing or not a regular file
    ///
    /// Returned by copy operations when the source path does not exist or
    /// points at something other than a regular file. The destination is
    /// left untouched when this error is raised.
    #[error("Source file not found: {path}")]
    SourceNotFound {
        /// The source path that failed the regular-file check
        path: String,
    },

    /// Path exists but is not a directory
    ///
    /// Returned by directory-ensuring operations when the requested path is
    /// already occupied by a file or other non-directory entry.
    #[error("Path exists but is not a directory: {path}")]
    NotADirectory {
        /// The path occupied by a non-directory entry
        path: String,
    },

    /// Group size of zero passed to a grouping adapter
    ///
    /// Chunking and windowing both require a size of at least 1; a zero
    /// size would never terminate or never yield.
    #[error("{operation} requires a size of at least 1")]
    InvalidSize {
        /// The operation that rejected the size (e.g. "chunked", "windowed")
        operation: String,
    },

    /// Composition requested over an empty function list
    ///
    /// An empty composition has no well-defined result type, so it is
    /// rejected up front rather than silently behaving as identity.
    #[error("Cannot compose an empty list of functions")]
    EmptyCompose,

    /// Standard I/O error from [`std::io::Error`]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
