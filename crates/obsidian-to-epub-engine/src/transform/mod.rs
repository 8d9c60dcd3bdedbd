pub mod admonitions;
pub mod headings;
mod lines;

pub use admonitions::{Callout, ScanState, Step, rewrite_admonitions, step};
pub use headings::{heading_level, space_headings};

/// Rewrites a note into Pandoc-friendly markdown: heading spacing first,
/// then callouts.
pub fn process_markdown(text: &str) -> String {
    rewrite_admonitions(&space_headings(text))
}
