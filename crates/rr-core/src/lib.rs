//! `rr-core` — foundational types for the road relabel exporter.
//!
//! Every other `rr-*` crate depends on this one.  It has no `rr-*`
//! dependencies and only `serde`, `serde_json` and `thiserror` externally.
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`ids`]      | `NormalizedId`, `FeatureId`, `ExternalNodeId`             |
//! | [`geo`]      | `Coordinate`, planar and haversine distance               |
//! | [`raw`]      | Provider output shape: `RawNetwork`, `RawFeature`, …      |
//! | [`config`]   | `ExportConfig`, `NetworkType`, `ProviderKind`             |
//! | [`error`]    | `CoreError`, `CoreResult`                                 |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod raw;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ExportConfig, NetworkType, ProviderKind, TagFilters};
pub use error::{CoreError, CoreResult};
pub use geo::Coordinate;
pub use ids::{ExternalNodeId, FeatureId, NormalizedId};
pub use raw::{FeatureGeometry, RawEdge, RawFeature, RawNetwork, RawNode};
