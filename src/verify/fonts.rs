use std::path::Path;

use crate::config::RewriteConfig;

/// Required font files that do not exist below `site_root`, in configuration order.
pub fn missing_fonts(site_root: &Path, config: &RewriteConfig) -> Vec<String> {
  config
    .required_fonts
    .iter()
    .filter(|font| !site_root.join(font.as_str()).is_file())
    .cloned()
    .collect()
}
