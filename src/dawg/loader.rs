//! Bulk loading of word lists, one word per line.
//!
//! Lines are fed to [`Builder::add`] in the order they are read, so the source must
//! already be sorted. The loader finalizes the builder before returning it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::builder::Builder;
use crate::error::LoadError;

/// Where the lines of a word list come from.
pub enum LineSource<'a> {
    /// A file to open and read.
    Path(&'a Path),
    /// An already open line stream.
    Reader(Box<dyn BufRead + 'a>),
}

impl<'a> LineSource<'a> {
    /// A source reading the file at `path`.
    pub fn path<P: AsRef<Path> + ?Sized>(path: &'a P) -> Self {
        LineSource::Path(path.as_ref())
    }

    /// A source reading from an open stream.
    pub fn reader(reader: impl BufRead + 'a) -> Self {
        LineSource::Reader(Box::new(reader))
    }

    fn open(self) -> Result<Box<dyn BufRead + 'a>, LoadError> {
        match self {
            LineSource::Path(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            LineSource::Reader(reader) => Ok(reader),
        }
    }
}

/// Which lines the loader skips instead of adding them as words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Skip lines whose first non-whitespace character is `#`.
    pub skip_comments: bool,
    /// Skip empty lines.
    pub skip_blank: bool,
}

impl LoadOptions {
    /// Options for dictionary files: comments and blank lines are skipped.
    pub fn dictionary() -> Self {
        LoadOptions {
            skip_comments: true,
            skip_blank: true,
        }
    }

    fn skips(&self, line: &str) -> bool {
        (self.skip_blank && line.is_empty()) || (self.skip_comments && is_comment(line))
    }
}

/// Builds a DAWG from every line of `source`, then finalizes it.
///
/// Line terminators are stripped; nothing else is trimmed, so every line, blank ones
/// included, is added as a word.
///
/// # Errors
///
/// [`LoadError::Input`] if `source` is `None`, [`LoadError::Io`] if it cannot be
/// opened or read and [`LoadError::Build`] if the lines are not sorted.
///
/// ```
/// use lexdawg::dawg::loader::{build_from_lines, LineSource};
///
/// let dawg = build_from_lines(Some(LineSource::reader("cat\ncats\ndog\n".as_bytes()))).unwrap();
/// assert!(dawg.contains("cats"));
/// assert_eq!(dawg.word_count(), 3);
/// ```
pub fn build_from_lines(source: Option<LineSource<'_>>) -> Result<Builder<char>, LoadError> {
    build_from_lines_with(source, &LoadOptions::default())
}

/// Like [`build_from_lines`], skipping the lines `options` selects.
pub fn build_from_lines_with(
    source: Option<LineSource<'_>>,
    options: &LoadOptions,
) -> Result<Builder<char>, LoadError> {
    let mut reader = source.ok_or(LoadError::Input)?.open()?;
    let mut builder = Builder::new();

    // read_line into one reused buffer instead of lines(), which allocates a new
    // String for every line.
    let mut buf = String::with_capacity(80);
    let mut lines = 0usize;
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        lines += 1;
        let word = strip_line_terminator(&buf);
        if options.skips(word) {
            continue;
        }
        builder.add(word)?;
    }
    builder.finalize();

    debug!(
        lines,
        words = builder.word_count(),
        nodes = builder.node_count(),
        "loaded word list"
    );
    Ok(builder)
}

/// Builds a DAWG from a dictionary file, one word per line.
///
/// Lines starting with '#' are treated as comments and ignored. Empty lines are skipped.
///
/// ```no_run
/// use lexdawg::dawg::loader::build_dawg_from_file;
///
/// let dawg = build_dawg_from_file("dictionary.txt").unwrap();
/// ```
pub fn build_dawg_from_file(path: impl AsRef<Path>) -> Result<Builder<char>, LoadError> {
    build_from_lines_with(
        Some(LineSource::path(path.as_ref())),
        &LoadOptions::dictionary(),
    )
}

/// Removes a trailing `\n` or `\r\n`.
fn strip_line_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => line,
    }
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
