//! File system utilities built around atomic replacement and lazy traversal
//!
//! This module provides safe file operations designed so that interrupted
//! work never leaves a target file in a partial state. Writes and copies
//! stage their content next to the destination and arrive through a single
//! rename; discovery and line reading are lazy iterators that touch the
//! disk only as they are consumed.
//!
//! # Key Features
//!
//! - **Atomic operations**: Writes and copies never expose partial content
//! - **Idempotent setup**: Directory creation and `touch` are safe to repeat
//! - **Lazy traversal**: Glob discovery and line reading stream their results
//! - **Safety**: Symlinked directories are never followed during discovery
//!
//! # Examples
//!
//! ```rust,no_run
//! use sundry::fs::{ensure_dir, find_files, safe_write_text, WriteOptions};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! // Create directory structure
//! ensure_dir(Path::new("output/reports"))?;
//!
//! // Write file atomically
//! safe_write_text(
//!     Path::new("output/reports/latest.txt"),
//!     "all green",
//!     WriteOptions::default(),
//! )?;
//!
//! // Discover what landed
//! for path in find_files(Path::new("output"), "*.txt")? {
//!     println!("report: {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod atomic;
pub mod copy;
pub mod dirs;
pub mod find;
pub mod lines;

// Re-export commonly used items from each module

// Atomic write operations
pub use atomic::{LineEnding, WriteOptions, atomic_write, safe_write_text};

// Atomic copy
pub use copy::copy_file_atomic;

// Directory operations
pub use dirs::{ensure_dir, ensure_parent_dir, mkdir_p, touch};

// File discovery
pub use find::{FileFinder, FindIter, find_files};

// Lazy line reading
pub use lines::{TextLines, read_text_lines};
