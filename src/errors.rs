use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpindleError {
    #[error("Manifest {} could not be read: {}", .0.display(), .1)]
    ManifestUnreadable(PathBuf, String),

    #[error("No valid file paths found in manifest {}", .0.display())]
    NoPatterns(PathBuf),

    #[error("Invalid pattern {0}: {1}")]
    InvalidPattern(String, String),

    #[error("Error writing to {}: {}", .0.display(), .1)]
    OutputWriteError(PathBuf, String),

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("Tokenizer Error: {0}")]
    TokenizerError(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl SpindleError {
    /// Process exit code for errors that end a run.
    pub fn exit_code(&self) -> u8 {
        match self {
            SpindleError::OutputWriteError(..) => 2,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for SpindleError {
    fn from(err: std::io::Error) -> Self {
        SpindleError::IoError(err.to_string())
    }
}
