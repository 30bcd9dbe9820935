//! Lazy glob-based file discovery.
//!
//! This module provides recursive file finding driven by glob patterns.
//! Matching is lazy: directory entries are visited one at a time as the
//! returned iterator is consumed, so early termination never walks the
//! rest of the tree.
//!
//! # Pattern Syntax
//!
//! Standard glob patterns are supported:
//!
//! - `*` matches any sequence of characters within a single path component
//! - `**` matches any sequence of path components (recursive matching)
//! - `?` matches any single character
//! - `[abc]` matches any character in the set
//! - `[a-z]` matches any character in the range
//!
//! Patterns are matched against paths relative to the search root. A
//! pattern that does not already start with `**` is anchored as
//! `**/<pattern>`, so `"*.md"` finds markdown files at any depth and
//! `"logs/*.txt"` finds text files inside any `logs` directory in the
//! tree.

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// `*` stays inside one path component; `**` crosses components.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Glob-driven file finder with lazy recursive traversal.
///
/// The pattern is compiled once at construction and reused for every
/// entry visited. Directories are skipped by default; enable
/// [`include_dirs`](Self::include_dirs) to yield them as well.
///
/// # Examples
///
/// ```rust,no_run
/// use sundry::fs::FileFinder;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let finder = FileFinder::new("*.toml")?;
///
/// // Check candidate paths without touching the filesystem
/// assert!(finder.matches(Path::new("config/app.toml")));
/// assert!(!finder.matches(Path::new("config/app.json")));
///
/// // Walk a tree lazily; stop after the first hit
/// let first = finder.find(Path::new("/etc/app")).next();
/// println!("{first:?}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileFinder {
    pattern: Pattern,
    original_pattern: String,
    include_dirs: bool,
}

impl FileFinder {
    /// Creates a finder from a glob pattern string.
    ///
    /// The pattern is compiled once during creation. Patterns not already
    /// starting with `**` are anchored as `**/<pattern>` so matching is
    /// recursive by default.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern contains invalid glob syntax.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sundry::fs::FileFinder;
    ///
    /// let finder = FileFinder::new("report-[0-9].csv")?;
    /// assert_eq!(finder.pattern(), "report-[0-9].csv");
    ///
    /// assert!(FileFinder::new("broken[").is_err());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn new(pattern_str: &str) -> Result<Self> {
        let anchored = if pattern_str.starts_with("**") {
            pattern_str.to_string()
        } else {
            format!("**/{pattern_str}")
        };

        let pattern = Pattern::new(&anchored)
            .with_context(|| format!("Invalid glob pattern: {pattern_str}"))?;

        Ok(Self {
            pattern,
            original_pattern: pattern_str.to_string(),
            include_dirs: false,
        })
    }

    /// Whether directories whose names match the pattern are yielded too.
    ///
    /// Off by default: only regular files (and symlinks to them) appear in
    /// results.
    #[must_use]
    pub fn include_dirs(mut self, include: bool) -> Self {
        self.include_dirs = include;
        self
    }

    /// Checks if a single path matches the compiled pattern.
    ///
    /// This is a lightweight operation without filesystem access, useful
    /// for filtering paths obtained elsewhere. The path is tested as
    /// given, so pass paths relative to the intended root.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        self.pattern.matches_with(&path.to_string_lossy(), MATCH_OPTIONS)
    }

    /// Returns the original pattern string used to create this finder.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.original_pattern
    }

    /// Lazily finds matching entries under `root`.
    ///
    /// Traversal does not follow symlinked directories, and entries that
    /// cannot be read are skipped rather than aborting the walk. A missing
    /// root yields an empty sequence. Yielded paths keep `root` as their
    /// prefix.
    pub fn find(&self, root: &Path) -> FindIter {
        debug!("Searching for pattern '{}' in {}", self.original_pattern, root.display());

        FindIter {
            pattern: self.pattern.clone(),
            include_dirs: self.include_dirs,
            root: root.to_path_buf(),
            walker: WalkDir::new(root).follow_links(false).min_depth(1).into_iter(),
        }
    }
}

/// Lazy iterator over paths matching a [`FileFinder`] pattern.
///
/// Created by [`FileFinder::find`] or [`find_files`]. Dropping it early
/// abandons the remaining traversal.
pub struct FindIter {
    pattern: Pattern,
    include_dirs: bool,
    root: PathBuf,
    walker: walkdir::IntoIter,
}

impl Iterator for FindIter {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(error) => {
                    trace!("Skipping unreadable entry: {error}");
                    continue;
                }
            };

            // A symlink resolving to a directory counts as a directory
            // here, even though the walk never descends through it.
            let is_dir = entry.file_type().is_dir()
                || (entry.file_type().is_symlink() && entry.path().is_dir());
            if is_dir && !self.include_dirs {
                continue;
            }

            // Match against the path relative to the search root.
            let relative = entry.path().strip_prefix(&self.root).unwrap_or_else(|_| entry.path());
            let relative_str = relative.to_string_lossy();

            trace!("Checking path: {relative_str}");

            if self.pattern.matches_with(&relative_str, MATCH_OPTIONS) {
                debug!("Found match: {relative_str}");
                return Some(entry.into_path());
            }
        }
    }
}

/// Lazily finds files under `root` whose paths match `pattern`.
///
/// Convenience for [`FileFinder::new`] followed by [`FileFinder::find`].
/// The returned iterator yields full paths prefixed by `root`, in
/// traversal order.
///
/// # Errors
///
/// Returns an error if the pattern contains invalid glob syntax. Missing
/// or unreadable directories are not an error; they simply contribute no
/// results.
///
/// # Examples
///
/// ```rust,no_run
/// use sundry::fs::find_files;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// for path in find_files(Path::new("src"), "*.rs")? {
///     println!("{}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub fn find_files(root: &Path, pattern: &str) -> Result<FindIter> {
    Ok(FileFinder::new(pattern)?.find(root))
}
