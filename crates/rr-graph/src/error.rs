//! Graph-stage error type.

use thiserror::Error;

use rr_core::{Coordinate, ExternalNodeId};

/// Errors produced by `rr-graph`.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    /// The provider yielded the same node twice with different coordinates.
    /// Fatal for the normalization stage.
    #[error("node {id} appears twice with conflicting coordinates {first} and {second}")]
    DuplicateNode {
        id:     ExternalNodeId,
        first:  Coordinate,
        second: Coordinate,
    },

    /// An edge references a node that was never yielded.  Recovered by
    /// skipping the edge.
    #[error("edge #{edge} references unknown node {id}")]
    UnknownNode { edge: usize, id: ExternalNodeId },

    #[error("node count {0} exceeds the NormalizedId range")]
    TooManyNodes(usize),
}

pub type GraphResult<T> = Result<T, GraphError>;
