//! Pipeline error type.
//!
//! Every stage's own error converts in with `?`; recovered per-record errors
//! never reach this type.

use rr_core::CoreError;
use rr_graph::GraphError;
use rr_output::OutputError;
use rr_provider::ProviderError;
use rr_spatial::SpatialError;
use thiserror::Error;

/// A stage failure.  Each variant names the stage that aborted the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration: {0}")]
    Config(#[from] CoreError),

    #[error("provider: {0}")]
    Provider(#[from] ProviderError),

    #[error("normalization: {0}")]
    Graph(#[from] GraphError),

    #[error("spatial resolution: {0}")]
    Spatial(#[from] SpatialError),

    #[error("output: {0}")]
    Output(#[from] OutputError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
