//! Locating the files that the rewriter should process.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RewriteConfig;
use crate::error::RewriteError;

/// Every `.html` file below `dir`, sorted.
///
/// Hidden entries (names starting with `.`) are skipped and symbolic links to directories are
/// not followed. Only `dir` itself must be readable; nested directories that cannot be listed
/// are logged and skipped.
pub fn html_files(dir: &Path) -> Result<Vec<PathBuf>, RewriteError> {
  if !dir.is_dir() {
    return Err(RewriteError::MissingDirectory {
      path: dir.to_path_buf(),
    });
  }

  let mut found = BTreeSet::new();
  collect_files_recursively(dir, "html", &mut found)?;
  Ok(found.into_iter().collect())
}

/// The fixed working set of an exported site: the root document, every stylesheet below the
/// stylesheet root, and any extra stylesheets that exist at the site root.
pub fn working_set(site_root: &Path, config: &RewriteConfig) -> Result<Vec<PathBuf>, RewriteError> {
  if !site_root.is_dir() {
    return Err(RewriteError::MissingDirectory {
      path: site_root.to_path_buf(),
    });
  }

  let mut files = vec![config.index_path(site_root)];

  let mut stylesheets = BTreeSet::new();
  let stylesheet_root = site_root.join(&config.stylesheet_root);
  if stylesheet_root.is_dir() {
    collect_nested_files(&stylesheet_root, "css", &mut stylesheets);
  }
  for extra in &config.extra_stylesheets {
    let path = site_root.join(extra);
    if path.is_file() {
      stylesheets.insert(path);
    } else {
      tracing::debug!(path = %path.display(), "extra stylesheet not present");
    }
  }

  for path in stylesheets {
    if !files.contains(&path) {
      files.push(path);
    }
  }

  Ok(files)
}

fn collect_files_recursively(
  dir: &Path,
  extension: &str,
  found: &mut BTreeSet<PathBuf>,
) -> Result<(), RewriteError> {
  let entries = fs::read_dir(dir).map_err(|source| RewriteError::Read {
    path: dir.to_path_buf(),
    source,
  })?;

  for entry in entries.flatten() {
    let file_name = entry.file_name();
    if file_name.to_string_lossy().starts_with('.') {
      continue;
    }

    let Ok(file_type) = entry.file_type() else {
      continue;
    };
    let path = entry.path();
    if file_type.is_dir() {
      collect_nested_files(&path, extension, found);
    } else if has_extension(&path, extension) {
      found.insert(path);
    }
  }

  Ok(())
}

fn collect_nested_files(dir: &Path, extension: &str, found: &mut BTreeSet<PathBuf>) {
  if let Err(err) = collect_files_recursively(dir, extension, found) {
    tracing::warn!(error = %err, "skipping unreadable directory");
  }
}

fn has_extension(path: &Path, extension: &str) -> bool {
  path
    .extension()
    .and_then(|value| value.to_str())
    .is_some_and(|value| value.eq_ignore_ascii_case(extension))
}
