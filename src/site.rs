//! Full GitHub Pages preparation of an exported site: rewrite, bookkeeping files and checks.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::RewriteConfig;
use crate::discovery::working_set;
use crate::driver::rewrite_files;
use crate::models::{PreparedSite, ReferenceCheck};
use crate::pages::{write_nojekyll, write_readme};
use crate::rewrite::PathRewriter;
use crate::verify::{missing_fonts, missing_references};

/// High-level helper running every preparation step against one site root.
pub struct SitePreparer<'a> {
  site_root: &'a Path,
  config: &'a RewriteConfig,
}

impl<'a> SitePreparer<'a> {
  /// Create a preparer for the site at `site_root`.
  pub fn new(site_root: &'a Path, config: &'a RewriteConfig) -> Self {
    Self { site_root, config }
  }

  /// Rewrite the working set, write the marker and README, then run the advisory checks.
  ///
  /// Per-file rewrite failures are recorded in the summary. Failing to write the marker or the
  /// README aborts the preparation.
  pub fn prepare(&self) -> Result<PreparedSite> {
    let rewriter = PathRewriter::new(self.config).context("failed to compile rewrite rules")?;
    let files = working_set(self.site_root, self.config)?;
    let summary = rewrite_files(&rewriter, files);

    let marker_path = write_nojekyll(self.site_root)?;
    tracing::info!(path = %marker_path.display(), "wrote marker");
    let readme_path = write_readme(self.site_root, self.config)?;
    tracing::info!(path = %readme_path.display(), "wrote readme");

    let references = self.check_references();
    let missing_fonts = missing_fonts(self.site_root, self.config);
    for font in &missing_fonts {
      tracing::warn!(font = %font, "font file missing");
    }

    Ok(PreparedSite {
      summary,
      marker_path,
      readme_path,
      references,
      missing_fonts,
    })
  }

  fn check_references(&self) -> ReferenceCheck {
    let index = self.config.index_path(self.site_root);
    match missing_references(self.site_root, &index, self.config) {
      Ok(missing) => {
        for reference in &missing {
          tracing::warn!(reference = %reference, "referenced file missing");
        }
        ReferenceCheck::Checked(missing)
      }
      Err(err) => {
        tracing::warn!(error = %err, "skipped reference check");
        ReferenceCheck::Skipped(err.to_string())
      }
    }
  }
}
