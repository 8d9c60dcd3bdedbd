use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },
    #[error("{program} exited with {status}")]
    Failed {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
}

/// Bundles staged markdown documents into a single EPUB.
pub trait Converter {
    /// Converts `inputs`, in the given order, into one document at `output`
    /// with `stylesheet` linked in.
    fn convert(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        stylesheet: &Path,
    ) -> Result<(), ConvertError>;
}

/// Runs the `pandoc` executable.
#[derive(Debug, Clone)]
pub struct Pandoc {
    program: PathBuf,
    extra_args: Vec<String>,
}

impl Pandoc {
    pub const DEFAULT_PROGRAM: &'static str = "pandoc";

    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            extra_args: Vec::new(),
        }
    }

    /// Arguments appended after the inputs, output and stylesheet.
    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn command(&self, inputs: &[PathBuf], output: &Path, stylesheet: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(inputs)
            .arg("-o")
            .arg(output)
            .arg("--css")
            .arg(stylesheet)
            .args(&self.extra_args);
        command
    }
}

impl Default for Pandoc {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

impl Converter for Pandoc {
    fn convert(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        stylesheet: &Path,
    ) -> Result<(), ConvertError> {
        let result = self
            .command(inputs, output, stylesheet)
            .output()
            .map_err(|source| ConvertError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(ConvertError::Failed {
                program: self.program.clone(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::ffi::OsStr;

    #[test]
    fn builds_pandoc_command_line() {
        let pandoc = Pandoc::default().with_extra_args(vec!["--toc".to_string()]);
        let inputs = vec![PathBuf::from("/stage/a.md"), PathBuf::from("/stage/b.md")];

        let command = pandoc.command(
            &inputs,
            Path::new("out/book.epub"),
            Path::new("/stage/default.css"),
        );

        assert_eq!(command.get_program(), OsStr::new("pandoc"));
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(
            args,
            vec![
                OsStr::new("/stage/a.md"),
                OsStr::new("/stage/b.md"),
                OsStr::new("-o"),
                OsStr::new("out/book.epub"),
                OsStr::new("--css"),
                OsStr::new("/stage/default.css"),
                OsStr::new("--toc"),
            ]
        );
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let pandoc = Pandoc::new("/definitely/not/a/real/pandoc");

        let result = pandoc.convert(
            &[PathBuf::from("a.md")],
            Path::new("out.epub"),
            Path::new("default.css"),
        );

        assert!(matches!(result, Err(ConvertError::Spawn { .. })));
        assert!(result.unwrap_err().to_string().contains("Failed to run"));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_a_failure() {
        // `false` ignores its arguments and exits with status 1.
        let pandoc = Pandoc::new("false");

        let result = pandoc.convert(
            &[PathBuf::from("a.md")],
            Path::new("out.epub"),
            Path::new("default.css"),
        );

        match result {
            Err(ConvertError::Failed { status, .. }) => assert!(!status.success()),
            other => panic!("expected a failed conversion, got {other:?}"),
        }
    }
}
