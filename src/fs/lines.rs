//! Lazy line-by-line text file reading.
//!
//! The reader holds a buffered file handle and produces one line per
//! iteration step, so large files never need to fit in memory. Dropping
//! the iterator early closes the handle with the rest of the file unread.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Lazy iterator over the lines of a text file.
///
/// Created by [`read_text_lines`]. Each step yields an [`io::Result`] so
/// mid-file failures (including invalid UTF-8) surface on the line where
/// they occur instead of poisoning the whole read.
///
/// By default line terminators are stripped: any trailing run of `\n` and
/// `\r` characters is removed, which covers Unix, Windows, and old-Mac
/// endings alike. Disable with [`strip_newline`](Self::strip_newline) to
/// receive lines exactly as stored.
#[derive(Debug)]
pub struct TextLines {
    reader: BufReader<File>,
    strip_newline: bool,
}

impl TextLines {
    /// Whether trailing newline characters are removed from each line.
    ///
    /// On by default.
    #[must_use]
    pub fn strip_newline(mut self, strip: bool) -> Self {
        self.strip_newline = strip;
        self
    }
}

impl Iterator for TextLines {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if self.strip_newline {
                    while line.ends_with('\n') || line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(error) => Some(Err(error)),
        }
    }
}

/// Opens a file for lazy line iteration.
///
/// The file is opened eagerly, so a missing or unreadable path fails here
/// rather than on the first iteration step. Content is read as UTF-8.
///
/// # Examples
///
/// ```rust,no_run
/// use sundry::fs::read_text_lines;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// for line in read_text_lines(Path::new("notes.txt"))? {
///     let line = line?;
///     if line.starts_with('#') {
///         println!("heading: {line}");
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub fn read_text_lines(path: &Path) -> Result<TextLines> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open for reading: {}", path.display()))?;

    Ok(TextLines {
        reader: BufReader::new(file),
        strip_newline: true,
    })
}
