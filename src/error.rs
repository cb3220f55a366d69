use miette::Diagnostic;
use thiserror::Error;

/// Main error type for brix operations
#[derive(Error, Diagnostic, Debug)]
pub enum BrixError {
    #[error("IO error: {0}")]
    #[diagnostic(code(brix::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(brix::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid input: {message}")]
    #[diagnostic(code(brix::input))]
    InvalidInput {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Not found: {message}")]
    #[diagnostic(code(brix::lookup))]
    NotFound {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(brix::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BrixError>;
