//! Data structures produced while relativizing and preparing a site.

use std::path::PathBuf;

/// Result of processing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
  /// The rewritten content differed and was written back.
  Modified,
  /// No rule changed the content, the file was left untouched.
  Unchanged,
}

/// A file that could not be read or written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
  /// Path of the failing file.
  pub path: PathBuf,
  /// Rendered error message.
  pub error: String,
}

/// Tally of a rewrite run over a set of files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
  /// Files attempted, including failures.
  pub processed: usize,
  /// Files whose content changed and was written back.
  pub modified: usize,
  /// Files left untouched.
  pub unmodified: usize,
  /// Files that failed to read or write.
  pub failures: Vec<FileFailure>,
}

impl RunSummary {
  /// Record the outcome of one file.
  pub fn record(&mut self, outcome: FileOutcome) {
    self.processed += 1;
    match outcome {
      FileOutcome::Modified => self.modified += 1,
      FileOutcome::Unchanged => self.unmodified += 1,
    }
  }

  /// Record a file that failed.
  pub fn record_failure(&mut self, path: PathBuf, error: String) {
    self.processed += 1;
    self.failures.push(FileFailure { path, error });
  }

  /// Number of failed files.
  pub fn failed(&self) -> usize {
    self.failures.len()
  }
}

/// Outcome of the advisory reference check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceCheck {
  /// Referenced paths that do not exist, in first-seen order.
  Checked(Vec<String>),
  /// The document could not be read.
  Skipped(String),
}

/// Everything produced by a full site preparation.
#[derive(Debug, Clone)]
pub struct PreparedSite {
  /// Rewrite tally for the working set.
  pub summary: RunSummary,
  /// Location of the written `.nojekyll` marker.
  pub marker_path: PathBuf,
  /// Location of the written deployment README.
  pub readme_path: PathBuf,
  /// Missing files referenced by the root document.
  pub references: ReferenceCheck,
  /// Required font files that are missing.
  pub missing_fonts: Vec<String>,
}
