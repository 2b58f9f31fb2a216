//! `rr-graph` — relabel a raw road network onto dense integer ids.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`normalizer`] | `IdNormalizer`, `NormalizedGraph`, `normalize`             |
//! | [`projector`]  | `Edge`, `EdgeProjection`, `project_edges`, `edge_weight`   |
//! | [`error`]      | `GraphError`, `GraphResult<T>`                             |

pub mod error;
pub mod normalizer;
pub mod projector;


pub use error::{GraphError, GraphResult};
pub use normalizer::{normalize, IdNormalizer, NormalizedGraph};
pub use projector::{edge_weight, project_edges, Edge, EdgeProjection, DEFAULT_WEIGHT};
