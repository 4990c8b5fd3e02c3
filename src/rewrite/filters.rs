use regex::Regex;

fn external_reference_patterns() -> &'static [Regex] {
  use std::sync::OnceLock;

  static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
  PATTERNS
    .get_or_init(|| {
      vec![
        Regex::new(r"(?i)^https?://").expect("invalid http(s) regex"),
        Regex::new(r"^//").expect("invalid protocol-relative regex"),
        Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
        Regex::new(r"(?i)^mailto:").expect("invalid mailto regex"),
      ]
    })
    .as_slice()
}

/// Determine whether a reference points outside the site and must be left as written.
///
/// Absolute URLs, protocol-relative URLs, data URIs and mail links never resolve against
/// the published site root, so neither the rewrite rules nor the existence checks touch them.
pub fn is_external_reference(value: &str) -> bool {
  external_reference_patterns()
    .iter()
    .any(|pattern| pattern.is_match(value))
}

#[cfg(test)]
mod tests {
  use super::is_external_reference;

  #[test]
  fn detects_http_urls() {
    assert!(is_external_reference("https://example.com/a"));
    assert!(is_external_reference("HTTP://example.com"));
  }

  #[test]
  fn detects_protocol_relative_urls() {
    assert!(is_external_reference("//fonts.googleapis.com/css"));
  }

  #[test]
  fn detects_data_and_mail_links() {
    assert!(is_external_reference("data:image/png;base64,abc"));
    assert!(is_external_reference("mailto:hello@example.com"));
  }

  #[test]
  fn keeps_site_paths() {
    assert!(!is_external_reference("/wp-content/uploads/a.png"));
    assert!(!is_external_reference("./wp-includes/js/jquery.js"));
    assert!(!is_external_reference("about/"));
  }
}
