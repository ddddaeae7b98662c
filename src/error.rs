use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Errors that cause daymap to exit with a specific code.
#[derive(Debug, thiserror::Error)]
pub enum ExitError {
    #[error("cannot read {path}: {source}")]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid data in {path}: {message}")]
    Schema { path: PathBuf, message: String },

    #[error("invalid time {input:?}: expected H:MM")]
    TimeFormat { input: String },
}

impl ExitError {
    pub fn missing_file(path: &Path, source: std::io::Error) -> Self {
        ExitError::MissingFile {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            ExitError::MissingFile { .. } => ExitCode::from(2),
            ExitError::Schema { .. } => ExitCode::from(3),
            ExitError::TimeFormat { .. } => ExitCode::from(4),
        }
    }
}
