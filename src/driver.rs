//! Per-file read, rewrite and write-back loop with isolated failures.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RewriteConfig;
use crate::discovery::html_files;
use crate::error::RewriteError;
use crate::models::{FileOutcome, RunSummary};
use crate::rewrite::PathRewriter;

/// Rewrite a single file in place, writing only when the content changed.
pub fn process_file(rewriter: &PathRewriter, path: &Path) -> Result<FileOutcome, RewriteError> {
  let original = fs::read_to_string(path).map_err(|source| RewriteError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  let rewritten = rewriter.rewrite(&original);
  if rewritten == original {
    return Ok(FileOutcome::Unchanged);
  }

  fs::write(path, rewritten).map_err(|source| RewriteError::Write {
    path: path.to_path_buf(),
    source,
  })?;
  Ok(FileOutcome::Modified)
}

/// Rewrite every file, logging and recording failures without stopping the batch.
pub fn rewrite_files<I, P>(rewriter: &PathRewriter, paths: I) -> RunSummary
where
  I: IntoIterator<Item = P>,
  P: Into<PathBuf>,
{
  let mut summary = RunSummary::default();

  for path in paths {
    let path = path.into();
    match process_file(rewriter, &path) {
      Ok(outcome) => {
        match outcome {
          FileOutcome::Modified => tracing::info!(path = %path.display(), "fixed paths"),
          FileOutcome::Unchanged => tracing::debug!(path = %path.display(), "already relative"),
        }
        summary.record(outcome);
      }
      Err(err) => {
        tracing::warn!(path = %path.display(), error = %err, "could not process file");
        summary.record_failure(path, err.to_string());
      }
    }
  }

  summary
}

/// Relativize every HTML file below `dir`.
pub fn relativize_directory(dir: &Path, config: &RewriteConfig) -> Result<RunSummary, RewriteError> {
  let rewriter = PathRewriter::new(config)?;
  let files = html_files(dir)?;
  tracing::debug!(dir = %dir.display(), count = files.len(), "discovered html files");
  Ok(rewrite_files(&rewriter, files))
}
