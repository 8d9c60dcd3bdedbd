use crate::convert::{ConvertError, Converter};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary notes directory with test files
pub fn create_test_notes_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content, creating any parent folders in `filename`
pub fn create_test_file(notes_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = notes_dir.path().join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Arguments seen by one [`RecordingConverter::convert`] call.
#[derive(Debug, Clone)]
pub struct ConvertCall {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub stylesheet: PathBuf,
    /// Contents of `inputs`, read while the staging directory still exists.
    pub staged_contents: Vec<String>,
}

enum Failure {
    Spawn(String),
    #[cfg(unix)]
    Exit(String),
}

/// A converter that records its calls instead of running pandoc.
pub struct RecordingConverter {
    calls: RefCell<Vec<ConvertCall>>,
    failure: Option<Failure>,
}

impl RecordingConverter {
    pub fn succeeding() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failure: Some(Failure::Spawn(message.to_string())),
        }
    }

    /// Fails as if pandoc ran and exited with status 1, printing `stderr`.
    #[cfg(unix)]
    pub fn exiting_with(stderr: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failure: Some(Failure::Exit(stderr.to_string())),
        }
    }

    pub fn calls(&self) -> Vec<ConvertCall> {
        self.calls.borrow().clone()
    }
}

impl Converter for RecordingConverter {
    fn convert(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        stylesheet: &Path,
    ) -> Result<(), ConvertError> {
        self.calls.borrow_mut().push(ConvertCall {
            inputs: inputs.to_vec(),
            output: output.to_path_buf(),
            stylesheet: stylesheet.to_path_buf(),
            staged_contents: inputs
                .iter()
                .map(|p| fs::read_to_string(p).unwrap())
                .collect(),
        });

        match &self.failure {
            None => Ok(()),
            Some(Failure::Spawn(message)) => Err(ConvertError::Spawn {
                program: PathBuf::from("fake-pandoc"),
                source: std::io::Error::other(message.clone()),
            }),
            #[cfg(unix)]
            Some(Failure::Exit(stderr)) => {
                use std::os::unix::process::ExitStatusExt;
                Err(ConvertError::Failed {
                    program: PathBuf::from("fake-pandoc"),
                    status: std::process::ExitStatus::from_raw(1 << 8),
                    stderr: stderr.clone(),
                })
            }
        }
    }
}
