//! Site configuration describing which paths get relativized and which assets are expected.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::RewriteError;

const DEFAULT_CONFIG_FILE: &str = "pages.config.json";

/// Layout and rewrite settings for an exported static site.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
  /// Top-level directories whose absolute or dot-relative references are made root-relative.
  pub asset_roots: Vec<String>,
  /// Absolute path prefixes that keep their leading slash.
  pub preserved_paths: Vec<String>,
  /// File name of the site's root HTML document.
  pub index_html_file: String,
  /// Directory scanned recursively for stylesheets in the fixed working set.
  pub stylesheet_root: String,
  /// Additional stylesheets at the site root that join the working set when present.
  pub extra_stylesheets: Vec<String>,
  /// Extensions treated as static assets by the reference check.
  pub asset_extensions: Vec<String>,
  /// Font files the published site depends on.
  pub required_fonts: Vec<String>,
  /// Site name rendered into the deployment README.
  pub site_name: String,
}

impl Default for RewriteConfig {
  fn default() -> Self {
    Self {
      asset_roots: vec!["wp-content".into(), "wp-includes".into()],
      preserved_paths: Vec::new(),
      index_html_file: "index.html".into(),
      stylesheet_root: "wp-content".into(),
      extra_stylesheets: vec!["custom-fonts.css".into()],
      asset_extensions: [
        "css", "js", "png", "jpg", "jpeg", "gif", "svg", "webp", "woff", "woff2", "eot",
        "ttf",
      ]
      .into_iter()
      .map(String::from)
      .collect(),
      required_fonts: [
        "Britannic-Bold-Regular",
        "Gilroy-Light",
        "Gilroy-Regular",
        "Gilroy-Medium",
        "Gilroy-Bold",
      ]
      .into_iter()
      .map(|name| format!("wp-content/uploads/2025/05/{name}.woff2"))
      .collect(),
      site_name: "Static Site".into(),
    }
  }
}

impl RewriteConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// A missing or unparsable configuration file yields the defaults.
  pub fn discover(site_root: &Path) -> Self {
    let candidate = site_root.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Result<Self, RewriteError> {
    let content = fs::read_to_string(path).map_err(|source| RewriteError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    serde_json::from_str(&content).map_err(|source| RewriteError::Config {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Path to the root HTML document of the site.
  pub fn index_path(&self, site_root: &Path) -> PathBuf {
    site_root.join(&self.index_html_file)
  }

  /// Asset roots with surrounding slashes and blank entries removed.
  pub fn normalised_asset_roots(&self) -> Vec<&str> {
    self.asset_roots
      .iter()
      .map(|root| root.trim().trim_matches('/'))
      .filter(|root| !root.is_empty())
      .collect()
  }
}
