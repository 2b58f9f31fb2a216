//! Core error type.
//!
//! Sub-crates define their own error enums for their own failure modes; the
//! pipeline crate wraps them all.  `CoreError` covers what lives here:
//! configuration loading and validation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `rr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
