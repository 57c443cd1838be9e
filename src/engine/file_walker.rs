//! File discovery for the scan root
//!
//! Only the files directly inside the root are considered (no recursion).
//! A file, or a link to one, is kept when its name matches one of the
//! include globs. Entries
//! are yielded sorted by file name so discovery order is deterministic.

use crate::types::GlobPattern;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during file walking
#[derive(Debug, Error)]
pub enum FileWalkerError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Reason why a file was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// File name did not match include patterns
    ExcludedByPattern,
    /// Entry is not a regular file (e.g., directory)
    NotAFile,
}

/// Result of file walking - either a file to scan or a skipped entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkResult {
    /// File to be scanned
    File(FileEntry),
    /// Entry that was skipped with reason
    Skipped { path: PathBuf, reason: SkipReason },
}

/// A discovered file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Iterator over discovered files
pub struct FileWalker {
    walker: ignore::Walk,
    include_set: GlobSet,
}

impl FileWalker {
    /// Creates a new FileWalker
    ///
    /// # Arguments
    /// * `root` - Directory whose direct children are scanned
    /// * `include` - File name patterns; a file must match at least one
    pub fn new(root: &Path, include: &[GlobPattern]) -> Result<Self, FileWalkerError> {
        let walker = WalkBuilder::new(root)
            .max_depth(Some(1))
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        Ok(Self {
            walker,
            include_set: Self::build_globset(include)?,
        })
    }

    /// Builds a GlobSet from patterns
    fn build_globset(patterns: &[GlobPattern]) -> Result<GlobSet, FileWalkerError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern.as_str()).map_err(|e| FileWalkerError::InvalidGlob {
                pattern: pattern.as_str().to_string(),
                source: e,
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|e| FileWalkerError::InvalidGlob {
            pattern: "<globset>".to_string(),
            source: e,
        })
    }

    /// Walks the root and returns an iterator over matching files
    pub fn walk(self) -> impl Iterator<Item = Result<FileEntry, FileWalkerError>> {
        self.walk_with_skip_info()
            .filter_map(|result| match result {
                Ok(WalkResult::File(file)) => Some(Ok(file)),
                Ok(WalkResult::Skipped { path, reason }) => {
                    tracing::debug!(path = %path.display(), ?reason, "skipping entry");
                    None
                }
                Err(e) => Some(Err(e)),
            })
    }

    /// Walks the root and returns an iterator with skip information
    pub fn walk_with_skip_info(self) -> impl Iterator<Item = Result<WalkResult, FileWalkerError>> {
        let include_set = self.include_set;

        self.walker.filter_map(move |result| {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => return Some(Err(FileWalkerError::Walk(e))),
            };

            // The root itself is reported at depth 0
            if entry.depth() == 0 {
                return None;
            }

            let path = entry.path();
            let is_file = match entry.file_type() {
                Some(ft) if ft.is_file() => true,
                // Links are resolved here; a dangling one is kept so the reader reports it
                Some(ft) if ft.is_symlink() => {
                    fs::metadata(path).map_or(true, |meta| meta.is_file())
                }
                _ => false,
            };
            if !is_file {
                return Some(Ok(WalkResult::Skipped {
                    path: path.to_path_buf(),
                    reason: SkipReason::NotAFile,
                }));
            }

            let matches = path
                .file_name()
                .is_some_and(|name| include_set.is_match(Path::new(name)));
            if !matches {
                return Some(Ok(WalkResult::Skipped {
                    path: path.to_path_buf(),
                    reason: SkipReason::ExcludedByPattern,
                }));
            }

            Some(Ok(WalkResult::File(FileEntry::new(path))))
        })
    }
}

/// Collects the matching files under `root` in discovery order
pub fn discover_files(root: &Path, include: &[GlobPattern]) -> Result<Vec<FileEntry>, FileWalkerError> {
    FileWalker::new(root, include)?.walk().collect()
}
