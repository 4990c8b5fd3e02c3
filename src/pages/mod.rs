//! Files GitHub Pages needs alongside the exported site.

pub mod marker;
pub mod readme;

pub use marker::{NOJEKYLL_FILE, write_nojekyll};
pub use readme::{README_FILE, render_readme, write_readme};
