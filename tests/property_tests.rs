//! Property-based tests for the path rewriter
//!
//! Generated markup mixes asset references, root-absolute links, external URLs and srcset
//! lists to check the invariants that must hold for any input.

use pages_relativizer::{PathRewriter, RewriteConfig};

use proptest::prelude::*;

fn rewriter() -> PathRewriter {
  PathRewriter::new(&RewriteConfig::default()).unwrap()
}

fn prefix() -> impl Strategy<Value = &'static str> {
  prop_oneof![Just(""), Just("/"), Just("./"), Just("/./"), Just("//")]
}

fn root() -> impl Strategy<Value = &'static str> {
  prop_oneof![Just("wp-content/"), Just("wp-includes/"), Just("about/"), Just("")]
}

fn reference() -> impl Strategy<Value = String> {
  (prefix(), root(), "[a-z0-9]{0,8}(\\.png|\\.css)?")
    .prop_map(|(prefix, root, tail)| format!("{prefix}{root}{tail}"))
}

fn markup() -> impl Strategy<Value = String> {
  let fragment = prop_oneof![
    reference().prop_map(|value| format!(r#"<a href="{value}">"#)),
    reference().prop_map(|value| format!(r#"<img src="{value}">"#)),
    reference().prop_map(|value| format!(r#"<meta content="{value}">"#)),
    reference().prop_map(|value| format!("a{{background:url('{value}')}}")),
    (reference(), reference())
      .prop_map(|(a, b)| format!(r#"<img srcset="{a} 1x, {b} 2x">"#)),
    "[a-z <>=\"/.]{0,20}",
  ];
  prop::collection::vec(fragment, 0..12).prop_map(|parts| parts.concat())
}

proptest! {
  /// Rewriting already rewritten content changes nothing
  #[test]
  fn prop_rewrite_is_idempotent(text in markup()) {
    let rewriter = rewriter();
    let once = rewriter.rewrite(&text);
    let twice = rewriter.rewrite(&once);
    prop_assert_eq!(once, twice);
  }

  /// External URLs survive untouched
  #[test]
  fn prop_external_urls_are_preserved(
    host in "[a-z]{1,10}\\.(com|org)",
    path in "(/wp-content|/wp-includes|)/[a-z]{0,8}",
    scheme in prop_oneof![Just("https:"), Just("http:"), Just("")],
  ) {
    let text = format!(r#"<a href="{scheme}//{host}{path}">"#);
    prop_assert_eq!(rewriter().rewrite(&text), text);
  }

  /// No attribute value keeps a leading slash or dot-slash in front of an asset root
  #[test]
  fn prop_asset_roots_lose_their_prefix(
    attr in prop_oneof![Just("href"), Just("src"), Just("content")],
    prefix in prop_oneof![Just("/"), Just("./"), Just("/./")],
    root in prop_oneof![Just("wp-content"), Just("wp-includes")],
    tail in "[a-z]{1,8}\\.png",
  ) {
    let text = format!(r#"<x {attr}="{prefix}{root}/{tail}">"#);
    prop_assert_eq!(rewriter().rewrite(&text), format!(r#"<x {attr}="{root}/{tail}">"#));
  }
}
