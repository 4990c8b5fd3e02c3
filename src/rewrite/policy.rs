use std::borrow::Cow;

use crate::config::RewriteConfig;

use super::filters::is_external_reference;

/// Decides how a single path value is relativized.
///
/// The substitution rules locate candidate values in the markup; the policy owns the
/// per-value decisions so that attribute values, stylesheet `url()` references and
/// `srcset` candidates are all treated identically.
#[derive(Debug, Clone)]
pub struct PathPolicy {
  asset_roots: Vec<String>,
  preserved_paths: Vec<String>,
}

impl PathPolicy {
  /// Build a policy from the configured asset roots and preserved paths.
  pub fn new(config: &RewriteConfig) -> Self {
    let asset_roots = config
      .normalised_asset_roots()
      .into_iter()
      .map(String::from)
      .collect();
    let preserved_paths = config
      .preserved_paths
      .iter()
      .map(|value| value.trim().trim_matches('/').to_string())
      .filter(|value| !value.is_empty())
      .collect();

    Self {
      asset_roots,
      preserved_paths,
    }
  }

  /// Asset roots in configuration order.
  pub fn asset_roots(&self) -> &[String] {
    &self.asset_roots
  }

  /// Strip the `/` or `./` prefix from a reference into one of the asset roots.
  pub fn strip_asset_root_prefix<'a>(&self, value: &'a str) -> Cow<'a, str> {
    let trimmed = trim_dot_slash(value);
    if trimmed.len() == value.len() || !self.starts_with_asset_root(trimmed) {
      return Cow::Borrowed(value);
    }
    if self.is_preserved(trimmed) {
      return Cow::Borrowed(value);
    }
    Cow::Borrowed(trimmed)
  }

  /// Strip the leading `/` of a root-absolute path; the homepage `/` becomes `./`.
  pub fn strip_leading_slash<'a>(&self, value: &'a str) -> Cow<'a, str> {
    match value.strip_prefix('/') {
      None => Cow::Borrowed(value),
      Some("") => Cow::Borrowed("./"),
      Some(rest) if rest.starts_with('/') => Cow::Borrowed(value),
      Some(rest) if self.is_preserved(rest) => Cow::Borrowed(value),
      Some(rest) => Cow::Borrowed(rest),
    }
  }

  /// Apply every applicable rewrite to one standalone reference.
  pub fn relativize<'a>(&self, value: &'a str) -> Cow<'a, str> {
    if is_external_reference(value) {
      return Cow::Borrowed(value);
    }

    match self.strip_asset_root_prefix(value) {
      Cow::Borrowed(unchanged) if unchanged.len() == value.len() => {
        self.strip_leading_slash(value)
      }
      stripped => stripped,
    }
  }

  fn starts_with_asset_root(&self, path: &str) -> bool {
    self.asset_roots.iter().any(|root| {
      path.strip_prefix(root.as_str())
        .is_some_and(|suffix| suffix.starts_with('/'))
    })
  }

  fn is_preserved(&self, path: &str) -> bool {
    self.preserved_paths
      .iter()
      .any(|rule| scope_matches(rule, path))
  }
}

/// Remove a single leading `/` followed by any number of `./` segments.
fn trim_dot_slash(value: &str) -> &str {
  let mut rest = value.strip_prefix('/').unwrap_or(value);
  while let Some(next) = rest.strip_prefix("./") {
    rest = next;
  }
  rest
}

fn scope_matches(rule: &str, candidate: &str) -> bool {
  candidate.strip_prefix(rule).is_some_and(|suffix| {
    suffix.is_empty() || suffix.starts_with(['/', '?', '#'])
  })
}
