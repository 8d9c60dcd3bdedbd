use crate::convert::{ConvertError, Converter};
use crate::io::{IoError, collect_staged_files, validate_source_dir};
use crate::staging::{Staging, stage_documents};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum EpubError {
    #[error("No markdown files found in {0}")]
    NoDocuments(PathBuf),
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Error generating EPUB: {0}")]
    Convert(#[from] ConvertError),
}

/// Converts every staged markdown file below `staging_dir` into one EPUB.
///
/// Files are passed to the converter sorted by full path. When nothing is
/// staged the converter is not called and [`EpubError::NoDocuments`] is
/// returned.
pub fn generate_epub(
    staging_dir: &Path,
    output: &Path,
    stylesheet: &Path,
    converter: &dyn Converter,
) -> Result<(), EpubError> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    let documents = collect_staged_files(staging_dir)?;
    log::info!("Markdown files found: {documents:?}");
    if documents.is_empty() {
        log::warn!("No markdown files found in {}", staging_dir.display());
        return Err(EpubError::NoDocuments(staging_dir.to_path_buf()));
    }

    match converter.convert(&documents, output, stylesheet) {
        Ok(()) => {
            log::info!("EPUB generated successfully: {}", output.display());
            Ok(())
        }
        Err(e) => {
            log::error!("Error generating EPUB: {e}");
            if let ConvertError::Failed { stderr, .. } = &e {
                log::error!("Stderr: {stderr}");
            }
            Err(e.into())
        }
    }
}

/// Rewrites the notes in `source_dir`, stages them and bundles them into `output`.
///
/// `on_file` receives each source note as it is processed. A missing source
/// directory is reported before anything is written.
pub fn convert_notes(
    source_dir: &Path,
    output: &Path,
    converter: &dyn Converter,
    on_file: impl FnMut(&Path),
) -> Result<(), EpubError> {
    validate_source_dir(source_dir)?;

    let staging = Staging::new()?;
    stage_documents(source_dir, staging.path(), on_file)?;
    let stylesheet = staging.write_stylesheet()?;
    log::info!("Using CSS file: {}", stylesheet.display());
    log::info!(
        "Generating EPUB: {} from {}",
        output.display(),
        staging.path().display()
    );

    generate_epub(staging.path(), output, &stylesheet, converter)
}
