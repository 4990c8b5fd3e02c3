//! Error type shared by the rewrite engine, discovery and driver.

use std::path::PathBuf;

/// Errors raised while discovering, reading or rewriting site files.
#[derive(Debug)]
pub enum RewriteError {
  /// The directory to scan does not exist or is not a directory.
  MissingDirectory {
    /// Directory that was requested.
    path: PathBuf,
  },
  /// Failed to read a file or directory.
  Read {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to write a rewritten file back to disk.
  Write {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// A substitution pattern built from configuration failed to compile.
  Pattern {
    /// Rule whose pattern was rejected.
    rule: &'static str,
    /// Source regex error.
    source: regex::Error,
  },
  /// Failed to parse a JSON configuration file.
  Config {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
}

impl std::fmt::Display for RewriteError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::MissingDirectory { path } => {
        write!(f, "directory {} does not exist", path.display())
      }
      Self::Read { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::Write { path, source } => {
        write!(f, "failed to write {}: {}", path.display(), source)
      }
      Self::Pattern { rule, source } => {
        write!(f, "invalid pattern for rule `{}`: {}", rule, source)
      }
      Self::Config { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
    }
  }
}

impl std::error::Error for RewriteError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::MissingDirectory { .. } => None,
      Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
      Self::Pattern { source, .. } => Some(source),
      Self::Config { source, .. } => Some(source),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::error::Error;

  #[test]
  fn displays_path_and_cause() {
    let err = RewriteError::Read {
      path: PathBuf::from("site/index.html"),
      source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "failed to read site/index.html: denied");
    assert!(err.source().is_some());
  }

  #[test]
  fn missing_directory_has_no_source() {
    let err = RewriteError::MissingDirectory {
      path: PathBuf::from("nowhere"),
    };
    assert_eq!(err.to_string(), "directory nowhere does not exist");
    assert!(err.source().is_none());
  }
}
