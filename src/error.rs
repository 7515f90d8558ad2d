use miette::Diagnostic;
use thiserror::Error;

/// Main error type for framecheck operations
#[derive(Error, Diagnostic, Debug)]
pub enum FrameError {
    #[error("IO error: {0}")]
    #[diagnostic(code(framecheck::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(framecheck::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(framecheck::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation failed: {message}")]
    #[diagnostic(code(framecheck::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, FrameError>;
