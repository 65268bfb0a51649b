//! Report file scanner with gitignore support

use crate::domain::{default_include_globs, BatchStats, ReportFile};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan root is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("invalid glob pattern '{pattern}'")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Scanner that discovers report files under a directory while respecting
/// gitignore rules. Hidden entries and `node_modules` are always skipped.
pub struct ReportScanner {
    root_path: PathBuf,
    include_globs: Vec<String>,
    exclude_globs: Vec<String>,
    max_file_bytes: u64,
    respect_gitignore: bool,
    follow_symlinks: bool,
    stats: BatchStats,
}

impl ReportScanner {
    /// Create a new scanner with default settings.
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            root_path,
            include_globs: default_include_globs().iter().map(|s| s.to_string()).collect(),
            exclude_globs: Vec::new(),
            max_file_bytes: 1_048_576, // 1MB
            respect_gitignore: true,
            follow_symlinks: false,
            stats: BatchStats::default(),
        }
    }

    /// Set glob patterns for files to include (e.g., "*.md")
    pub fn include_globs(mut self, globs: Vec<String>) -> Self {
        self.include_globs = globs;
        self
    }

    /// Set glob patterns to exclude
    pub fn exclude_globs(mut self, globs: Vec<String>) -> Self {
        self.exclude_globs = globs;
        self
    }

    /// Set maximum file size in bytes
    pub fn max_file_bytes(mut self, max_bytes: u64) -> Self {
        self.max_file_bytes = max_bytes;
        self
    }

    /// Set whether to respect gitignore files
    pub fn respect_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    /// Set whether to follow symbolic links
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Counters accumulated by the last `scan` call.
    pub fn stats(&self) -> &BatchStats {
        &self.stats
    }

    fn build_globset(patterns: &[String]) -> Result<GlobSet, ScanError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|source| ScanError::InvalidGlob {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|source| ScanError::InvalidGlob {
            pattern: patterns.join(","),
            source,
        })
    }

    /// A file is a candidate when a glob matches either its name or its
    /// relative path, so both "*.md" and "reports/**/*.md" work.
    fn globset_matches(globset: &GlobSet, relative_path: &str, file_name: &str) -> bool {
        globset.is_match(file_name) || globset.is_match(relative_path)
    }

    /// Scan the directory and return candidate report files.
    ///
    /// Files are returned in deterministic sorted order by relative path.
    pub fn scan(&mut self) -> Result<Vec<ReportFile>, ScanError> {
        if !self.root_path.is_dir() {
            return Err(ScanError::NotADirectory(self.root_path.clone()));
        }

        self.stats = BatchStats::default();
        let include_set = Self::build_globset(&self.include_globs)?;
        let exclude_set = Self::build_globset(&self.exclude_globs)?;

        let mut walker = WalkBuilder::new(&self.root_path);
        walker
            .follow_links(self.follow_symlinks)
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .ignore(self.respect_gitignore)
            .require_git(false)
            .filter_entry(|entry| entry.file_name().to_str() != Some("node_modules"));

        let mut files = Vec::new();
        for result in walker.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("skipping unwalkable entry: {err}");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            self.stats.files_scanned += 1;

            let path = entry.path();
            let relative_path = normalize_relative(path, &self.root_path);
            let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

            if !Self::globset_matches(&include_set, &relative_path, file_name)
                || Self::globset_matches(&exclude_set, &relative_path, file_name)
            {
                self.stats.files_skipped_glob += 1;
                continue;
            }

            let size_bytes = entry.metadata().map(|m| m.len()).unwrap_or(0);
            if size_bytes > self.max_file_bytes {
                self.stats.files_skipped_size += 1;
                continue;
            }

            files.push(ReportFile { path: path.to_path_buf(), relative_path, size_bytes });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }
}

/// Relative path with forward slashes, regardless of platform.
fn normalize_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
