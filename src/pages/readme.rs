//! Deployment README written next to the exported site.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::RewriteConfig;

use super::marker::NOJEKYLL_FILE;

/// File name of the generated README.
pub const README_FILE: &str = "README.md";

/// Render the README describing the site layout and how to publish it.
pub fn render_readme(config: &RewriteConfig) -> String {
  let roots = config.normalised_asset_roots();
  let root_lines = roots
    .iter()
    .map(|root| format!("- `{root}/` - exported assets (stylesheets, scripts, images, fonts)"))
    .collect::<Vec<_>>()
    .join("\n");

  let fonts_section = if config.required_fonts.is_empty() {
    String::new()
  } else {
    let font_lines = config
      .required_fonts
      .iter()
      .map(|font| format!("- `{font}`"))
      .collect::<Vec<_>>()
      .join("\n");
    format!(
      "\n## Custom Fonts\nThe site expects these font files to be present:\n{font_lines}\n\nBrowsers fall back to system fonts when any of them are missing.\n"
    )
  };

  format!(
    r#"# {site} - GitHub Pages Deployment

This repository contains a static export of {site} prepared for GitHub Pages.

## Files Structure
- `{index}` - Main website file
{root_lines}
- `{marker}` - Ensures GitHub Pages serves all files

## Deployment
1. Push this repository to GitHub
2. Go to Settings > Pages
3. Select "Deploy from a branch"
4. Choose your main branch (usually `main` or `master`)
5. Your site will be available at: `https://[username].github.io/[repository-name]/`
{fonts_section}
## Notes
- All asset paths have been converted to relative paths for GitHub Pages compatibility
- The `{marker}` file ensures GitHub Pages serves all files, including those starting with an underscore
"#,
    site = config.site_name,
    index = config.index_html_file,
    marker = NOJEKYLL_FILE,
  )
}

/// Write the deployment README at the site root, replacing any existing one.
pub fn write_readme(site_root: &Path, config: &RewriteConfig) -> Result<PathBuf> {
  let target = site_root.join(README_FILE);
  fs::write(&target, render_readme(config))
    .with_context(|| format!("failed to write {}", target.display()))?;
  Ok(target)
}
