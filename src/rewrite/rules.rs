use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::error::RewriteError;

use super::policy::PathPolicy;

/// Leading `/` or `./` segments that may precede an asset root.
const DOT_SLASH_PREFIX: &str = r"(?:/|\./)(?:\./)*";

/// How a matched value is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
  /// Drop the `/` or `./` prefix in front of an asset root.
  StripAssetRootPrefix,
  /// Drop the leading `/` of a root-absolute path, mapping the homepage to `./`.
  StripLeadingSlash,
  /// Relativize every candidate URL of a `srcset` list.
  SrcsetCandidates,
}

/// A named pattern paired with the rewrite applied to each match.
///
/// Every pattern captures a `lead` group that is emitted verbatim and a `value` group that
/// is handed to the [`PathPolicy`].
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
  name: &'static str,
  pattern: Regex,
  action: RuleAction,
}

impl SubstitutionRule {
  fn compile(name: &'static str, pattern: &str, action: RuleAction) -> Result<Self, RewriteError> {
    let pattern = Regex::new(pattern).map_err(|source| RewriteError::Pattern { rule: name, source })?;
    Ok(Self {
      name,
      pattern,
      action,
    })
  }

  /// Stable identifier used in diagnostics.
  pub fn name(&self) -> &'static str {
    self.name
  }

  /// Run a single left-to-right pass of the rule over `text`.
  pub fn apply<'t>(&self, policy: &PathPolicy, text: &'t str) -> Cow<'t, str> {
    self.pattern.replace_all(text, |caps: &Captures| {
      let lead = &caps["lead"];
      let value = &caps["value"];
      let rewritten = match self.action {
        RuleAction::StripAssetRootPrefix => policy.strip_asset_root_prefix(value),
        RuleAction::StripLeadingSlash => policy.strip_leading_slash(value),
        RuleAction::SrcsetCandidates => Cow::Owned(rewrite_srcset(policy, value)),
      };
      format!("{lead}{rewritten}")
    })
  }
}

/// Build the ordered rule list for the given policy.
pub fn build_rules(policy: &PathPolicy) -> Result<Vec<SubstitutionRule>, RewriteError> {
  let mut rules = Vec::new();

  if let Some(roots) = asset_root_alternation(policy) {
    rules.push(SubstitutionRule::compile(
      "asset-root-attributes",
      &format!(
        r#"\b(?P<lead>(?:href|src|content)=")(?P<value>{DOT_SLASH_PREFIX}(?:{roots})/[^"]*)"#
      ),
      RuleAction::StripAssetRootPrefix,
    )?);
    rules.push(SubstitutionRule::compile(
      "asset-root-css-url",
      &format!(
        r#"(?P<lead>url\(\s*['"]?)(?P<value>{DOT_SLASH_PREFIX}(?:{roots})/[^'")\s]*)"#
      ),
      RuleAction::StripAssetRootPrefix,
    )?);
  }

  rules.push(SubstitutionRule::compile(
    "root-absolute-attributes",
    r#"\b(?P<lead>(?:href|src)=")(?P<value>/[^"]*)"#,
    RuleAction::StripLeadingSlash,
  )?);
  rules.push(SubstitutionRule::compile(
    "srcset-candidates",
    r#"\b(?P<lead>srcset=")(?P<value>[^"]*)"#,
    RuleAction::SrcsetCandidates,
  )?);

  Ok(rules)
}

fn asset_root_alternation(policy: &PathPolicy) -> Option<String> {
  let roots = policy.asset_roots();
  if roots.is_empty() {
    return None;
  }
  Some(
    roots
      .iter()
      .map(|root| regex::escape(root))
      .collect::<Vec<_>>()
      .join("|"),
  )
}

/// Rewrite each candidate URL of a `srcset` list, leaving separators and descriptors intact.
///
/// A candidate URL is the whole run of non-whitespace after the separators, minus any trailing
/// commas; commas inside it (as in `data:` URIs) belong to the URL. Once a URL is followed by
/// whitespace, only the next comma ends its descriptors.
fn rewrite_srcset(policy: &PathPolicy, value: &str) -> String {
  let mut output = String::with_capacity(value.len());
  let mut rest = value;

  loop {
    let url_start = rest
      .find(|c: char| !(c.is_ascii_whitespace() || c == ','))
      .unwrap_or(rest.len());
    output.push_str(&rest[..url_start]);
    rest = &rest[url_start..];
    if rest.is_empty() {
      break;
    }

    let run_end = rest.find(|c: char| c.is_ascii_whitespace()).unwrap_or(rest.len());
    let url = rest[..run_end].trim_end_matches(',');
    output.push_str(&policy.relativize(url));
    rest = &rest[url.len()..];
    if rest.starts_with(',') {
      continue;
    }

    let descriptors_end = rest.find(',').unwrap_or(rest.len());
    output.push_str(&rest[..descriptors_end]);
    rest = &rest[descriptors_end..];
  }

  output
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::RewriteConfig;

  fn policy() -> PathPolicy {
    PathPolicy::new(&RewriteConfig::default())
  }

  fn rule(name: &str) -> SubstitutionRule {
    build_rules(&policy())
      .unwrap()
      .into_iter()
      .find(|rule| rule.name() == name)
      .unwrap()
  }

  #[test]
  fn rules_are_ordered() {
    let names: Vec<_> = build_rules(&policy())
      .unwrap()
      .iter()
      .map(SubstitutionRule::name)
      .collect();
    assert_eq!(names, vec![
      "asset-root-attributes",
      "asset-root-css-url",
      "root-absolute-attributes",
      "srcset-candidates",
    ]);
  }

  #[test]
  fn asset_root_rules_are_skipped_without_roots() {
    let policy = PathPolicy::new(&RewriteConfig {
      asset_roots: vec!["/".into()],
      ..RewriteConfig::default()
    });
    let rules = build_rules(&policy).unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].name(), "root-absolute-attributes");
    assert_eq!(rules[0].apply(&policy, r#"href="//cdn.test/a""#), r#"href="//cdn.test/a""#);
  }

  #[test]
  fn asset_root_attributes_cover_content_values() {
    let rule = rule("asset-root-attributes");
    let input = r#"<meta property="og:image" content="/wp-content/uploads/og.png">"#;
    assert_eq!(
      rule.apply(&policy(), input),
      r#"<meta property="og:image" content="wp-content/uploads/og.png">"#
    );
  }

  #[test]
  fn css_urls_with_any_quoting() {
    let rule = rule("asset-root-css-url");
    let input = "a{src:url('./wp-content/f.woff2')} b{src:url(\"/wp-content/g.woff2\")} c{background:url(/wp-includes/h.png)}";
    assert_eq!(
      rule.apply(&policy(), input),
      "a{src:url('wp-content/f.woff2')} b{src:url(\"wp-content/g.woff2\")} c{background:url(wp-includes/h.png)}"
    );
  }

  #[test]
  fn css_urls_outside_asset_roots_are_left_alone() {
    let rule = rule("asset-root-css-url");
    let input = "a{background:url(/images/bg.png)}";
    assert_eq!(rule.apply(&policy(), input), input);
  }

  #[test]
  fn srcset_leaves_descriptors_and_external_candidates() {
    let rule = rule("srcset-candidates");
    let input = r#"srcset="/wp-content/a.png 300w,https://cdn.test/b.png 600w, /img/c.png 900w""#;
    assert_eq!(
      rule.apply(&policy(), input),
      r#"srcset="wp-content/a.png 300w,https://cdn.test/b.png 600w, img/c.png 900w""#
    );
  }

  #[test]
  fn srcset_keeps_commas_inside_data_uris() {
    let rule = rule("srcset-candidates");
    let input = r#"srcset="data:image/jpeg;base64,/9j/4AAQSkZJRg== 1x""#;
    assert_eq!(rule.apply(&policy(), input), input);

    let input = r#"srcset="data:image/gif;base64,R0lGOD/lhAQ==, /wp-content/a.png 2x""#;
    assert_eq!(
      rule.apply(&policy(), input),
      r#"srcset="data:image/gif;base64,R0lGOD/lhAQ==, wp-content/a.png 2x""#
    );
  }

  #[test]
  fn srcset_trailing_commas_separate_bare_candidates() {
    let rule = rule("srcset-candidates");
    assert_eq!(
      rule.apply(&policy(), r#"srcset="/a.png,, /b.png""#),
      r#"srcset="a.png,, b.png""#
    );
  }
}
