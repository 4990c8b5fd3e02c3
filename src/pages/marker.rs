//! The `.nojekyll` marker that stops GitHub Pages from running Jekyll over the site.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File name of the marker.
pub const NOJEKYLL_FILE: &str = ".nojekyll";

/// Write an empty `.nojekyll` file at the site root, replacing any existing one.
pub fn write_nojekyll(site_root: &Path) -> Result<PathBuf> {
  let target = site_root.join(NOJEKYLL_FILE);
  fs::write(&target, b"").with_context(|| format!("failed to write {}", target.display()))?;
  Ok(target)
}
