//! `rr-provider` — where raw networks and landmark features come from.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`provider`] | `NetworkProvider` trait, `open_provider`                   |
//! | [`json`]     | `JsonProvider` for pre-extracted JSON networks             |
//! | [`osm`]      | `OsmPbfProvider` (feature = `"osm"` only)                  |
//! | [`error`]    | `ProviderError`, `ProviderResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag  | Effect                                          |
//! |-------|-------------------------------------------------|
//! | `osm` | Enables OSM PBF extracts via the `osmpbf` crate. |

pub mod error;
pub mod json;
pub mod provider;

#[cfg(feature = "osm")]
pub mod osm;


pub use error::{ProviderError, ProviderResult};
pub use json::JsonProvider;
pub use provider::{open_provider, NetworkProvider};

#[cfg(feature = "osm")]
pub use osm::OsmPbfProvider;
