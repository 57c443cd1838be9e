#![forbid(unsafe_code)]

//! Line store and context windows
//!
//! A [`SourceFile`] holds one file's content as an immutable, 1-indexed
//! sequence of lines. Rules never see the raw text directly: they iterate
//! lines and ask for a bounded [`Window`] of text following a trigger line.
//! Windows are clamped to the end of the file and never index past it.

use std::io;
use std::path::{Path, PathBuf};

/// A file's content split into lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    lines: Vec<String>,
}

/// A single line of a [`SourceFile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line number (1-indexed)
    pub number: usize,
    /// Line text without its terminator
    pub text: &'a str,
}

/// Concatenated text of a bounded range of lines, already clamped to the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    text: String,
}

impl SourceFile {
    /// Builds a SourceFile from in-memory text
    pub fn new(path: impl Into<PathBuf>, content: &str) -> Self {
        Self {
            path: path.into(),
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    /// Reads a SourceFile from disk
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read or is not
    /// valid UTF-8.
    pub fn read(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::new(path, &content))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines in the file
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over all lines in order
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> {
        self.lines_from(1, self.lines.len())
    }

    /// Iterates over lines `[start, start + span)`, clamped to the file
    pub fn lines_from(&self, start: usize, span: usize) -> impl Iterator<Item = Line<'_>> {
        let (first, end) = self.clamp(start, span);
        self.lines[first - 1..end - 1]
            .iter()
            .enumerate()
            .map(move |(offset, text)| Line {
                number: first + offset,
                text,
            })
    }

    /// Returns the newline-joined text of lines `[start, start + span)`
    ///
    /// A `start` past the end of the file yields an empty window.
    pub fn window(&self, start: usize, span: usize) -> Window {
        let (first, end) = self.clamp(start, span);
        Window {
            text: self.lines[first - 1..end - 1].join("\n"),
        }
    }

    /// Whether any line of the file contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Clamps a 1-indexed range to `[1, len + 1]`
    fn clamp(&self, start: usize, span: usize) -> (usize, usize) {
        let past_end = self.lines.len() + 1;
        let first = start.clamp(1, past_end);
        let end = first.saturating_add(span).min(past_end);
        (first, end)
    }
}

impl Window {
    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    /// Whether the window contains any of the needles
    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|needle| self.text.contains(needle))
    }

    /// Case-insensitive substring search; `needle` must be lowercase
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.text.to_lowercase().contains(needle)
    }
}
