pub mod convert;
pub mod epub;
pub mod io;
pub mod staging;
pub mod transform;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::{ConvertError, Converter, Pandoc};
pub use epub::{EpubError, convert_notes, generate_epub};
pub use io::*;
pub use staging::{DEFAULT_STYLESHEET, Staging, stage_documents};
pub use transform::process_markdown;
