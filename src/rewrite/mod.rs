//! Substitution engine converting absolute asset references into root-relative paths.
//!
//! Locating references (`rules`), deciding how a single value changes (`policy`) and
//! recognising external URLs (`filters`) live in separate submodules so each can be tested
//! on its own. Rules run in a fixed order with one pass each; nothing is iterated to a fixed
//! point, and the output of a full pass no longer matches any rule.

mod filters;
mod policy;
mod rules;

use std::borrow::Cow;

pub use filters::is_external_reference;
pub use policy::PathPolicy;
pub use rules::{RuleAction, SubstitutionRule};

use crate::config::RewriteConfig;
use crate::error::RewriteError;

/// Compiled rule set applied to the contents of HTML and CSS files.
#[derive(Debug, Clone)]
pub struct PathRewriter {
  policy: PathPolicy,
  rules: Vec<SubstitutionRule>,
}

impl PathRewriter {
  /// Compile the rules for the given configuration.
  pub fn new(config: &RewriteConfig) -> Result<Self, RewriteError> {
    let policy = PathPolicy::new(config);
    let rules = rules::build_rules(&policy)?;
    Ok(Self { policy, rules })
  }

  /// Apply every rule to `text` and return the transformed content.
  pub fn rewrite(&self, text: &str) -> String {
    let mut content = text.to_string();
    for rule in &self.rules {
      if let Cow::Owned(next) = rule.apply(&self.policy, &content) {
        tracing::trace!(rule = rule.name(), "rule matched");
        content = next;
      }
    }
    content
  }
}
