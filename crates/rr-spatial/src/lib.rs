//! `rr-spatial` — nearest-node resolution for landmark features.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`index`]     | `NodeIndex` (bulk-loaded R-tree), single and batch queries    |
//! | [`geometry`]  | `representative_point` for points, lines and polygons         |
//! | [`canonical`] | `canonical_name` substitution table                           |
//! | [`landmarks`] | `resolve_landmarks`, `Landmark`, `LandmarkSet`                |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Batch queries run on Rayon's global thread pool.          |

pub mod canonical;
pub mod error;
pub mod geometry;
pub mod index;
pub mod landmarks;

#[cfg(test)]
mod tests;

pub use canonical::canonical_name;
pub use error::{GeometryDefect, SpatialError, SpatialResult};
pub use geometry::representative_point;
pub use index::NodeIndex;
pub use landmarks::{resolve_landmarks, Landmark, LandmarkReport, LandmarkSet};
