//! Provider error type.
//!
//! These are failures of the external data source itself.  The core never
//! retries them; they are surfaced to the caller as-is.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON network error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "osm")]
    #[error("OSM parse error: {0}")]
    Osm(String),

    #[error("provider configuration error: {0}")]
    Config(String),

    #[error("provider {0} is not available in this build")]
    Unsupported(&'static str),
}

pub type ProviderResult<T> = Result<T, ProviderError>;
