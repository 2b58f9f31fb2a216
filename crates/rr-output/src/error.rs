//! Error types for rr-output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when writing or reading export files.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("text write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("could not move staged file into place at {path}: {source}")]
    Persist {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("{path}:{line}: {reason}")]
    Malformed {
        path:   PathBuf,
        line:   u64,
        reason: String,
    },

    #[error("{0} file written twice or after finish")]
    AlreadyWritten(&'static str),

    #[error("an earlier finish failed; nothing was published")]
    Abandoned,
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
