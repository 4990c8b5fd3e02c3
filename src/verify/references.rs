//! Existence check for assets referenced by a rewritten document.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::config::RewriteConfig;
use crate::error::RewriteError;
use crate::rewrite::is_external_reference;

fn reference_pattern() -> &'static Regex {
  use std::sync::OnceLock;

  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(r#"\b(?:src|href)="(?P<value>[^"]+)""#).expect("invalid reference regex")
  })
}

/// Report static-asset references in `document` that do not exist below `site_root`.
///
/// Only `src` and `href` values whose path ends in one of the configured asset extensions are
/// considered. Query strings and fragments are ignored when resolving the file.
pub fn missing_references(
  site_root: &Path,
  document: &Path,
  config: &RewriteConfig,
) -> Result<Vec<String>, RewriteError> {
  let content = fs::read_to_string(document).map_err(|source| RewriteError::Read {
    path: document.to_path_buf(),
    source,
  })?;

  let mut seen = BTreeSet::new();
  let mut missing = Vec::new();

  for caps in reference_pattern().captures_iter(&content) {
    let value = &caps["value"];
    if is_external_reference(value) {
      continue;
    }

    let path = strip_query_and_fragment(value);
    if path.is_empty() || !has_asset_extension(path, &config.asset_extensions) {
      continue;
    }

    if !site_root.join(path).exists() && seen.insert(value.to_string()) {
      missing.push(value.to_string());
    }
  }

  Ok(missing)
}

fn strip_query_and_fragment(value: &str) -> &str {
  value
    .split_once(['?', '#'])
    .map_or(value, |(path, _)| path)
}

fn has_asset_extension(path: &str, extensions: &[String]) -> bool {
  path
    .rsplit_once('.')
    .filter(|(stem, _)| !stem.ends_with('/'))
    .is_some_and(|(_, extension)| {
      extensions
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(extension))
    })
}
