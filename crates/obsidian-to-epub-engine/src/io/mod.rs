use crate::transform::process_markdown;
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(String),
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Failed to read directory entry: {0}")]
    Glob(#[from] glob::GlobError),
}

const MARKDOWN_EXTENSION: &str = "md";

/// Read a markdown file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Read `input`, rewrite it for Pandoc and write the result to `output`
pub fn process_markdown_file(input: &Path, output: &Path) -> Result<(), IoError> {
    let content = read_file(input)?;
    write_file(output, &process_markdown(&content))
}

/// Markdown files directly inside `source_dir`. Subdirectories are not visited.
pub fn scan_source_files(source_dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_source_dir(source_dir)?;
    glob_markdown(source_dir, &format!("*.{MARKDOWN_EXTENSION}"))
}

/// Markdown files anywhere below `staging_dir`, sorted by full path.
pub fn collect_staged_files(staging_dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    glob_markdown(staging_dir, &format!("**/*.{MARKDOWN_EXTENSION}"))
}

fn glob_markdown(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, IoError> {
    let full_pattern = format!("{}/{pattern}", Pattern::escape(&dir.to_string_lossy()));
    let mut files = Vec::new();
    for entry in glob::glob_with(&full_pattern, MatchOptions::new())? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(files)
}

pub fn validate_source_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidSourceDir(format!(
            "Directory '{}' does not exist",
            path.display()
        )));
    }

    Ok(())
}
