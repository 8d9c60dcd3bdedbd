//! Temporary copies of the rewritten notes, handed to the converter as a set.

use crate::io::{IoError, process_markdown_file, scan_source_files, write_file};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stylesheet linked into every generated EPUB. There is no override.
pub const DEFAULT_STYLESHEET: &str = include_str!("../assets/default.css");

pub const STYLESHEET_FILE_NAME: &str = "default.css";

/// A temporary staging directory, removed when dropped.
#[derive(Debug)]
pub struct Staging {
    dir: TempDir,
}

impl Staging {
    pub fn new() -> Result<Self, IoError> {
        let dir = tempfile::Builder::new()
            .prefix("obsidian-to-epub-")
            .tempdir()?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes the bundled stylesheet into the staging directory and returns its path.
    pub fn write_stylesheet(&self) -> Result<PathBuf, IoError> {
        let path = self.path().join(STYLESHEET_FILE_NAME);
        write_file(&path, DEFAULT_STYLESHEET)?;
        Ok(path)
    }
}

/// Rewrites every top-level note in `source_dir` into `staging_dir`, keeping
/// file names. `on_file` is called with each source path before it is
/// processed. Returns the staged paths.
pub fn stage_documents(
    source_dir: &Path,
    staging_dir: &Path,
    mut on_file: impl FnMut(&Path),
) -> Result<Vec<PathBuf>, IoError> {
    let mut staged = Vec::new();
    for source in scan_source_files(source_dir)? {
        let Some(file_name) = source.file_name() else {
            continue;
        };
        let target = staging_dir.join(file_name);
        on_file(&source);
        log::debug!("Staging {} as {}", source.display(), target.display());
        process_markdown_file(&source, &target)?;
        staged.push(target);
    }
    Ok(staged)
}
