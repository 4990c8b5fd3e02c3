//! Advisory checks run after rewriting; they report problems but never change files.

mod fonts;
mod references;

pub use fonts::missing_fonts;
pub use references::missing_references;
