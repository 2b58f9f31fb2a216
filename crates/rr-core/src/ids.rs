//! Identifier types.
//!
//! `NormalizedId` and `FeatureId` are dense `u32` indices, `Copy + Ord + Hash`
//! so they can be map keys and sort keys without ceremony.  The inner integer
//! is `pub` for direct indexing via `id.0 as usize`, but callers should prefer
//! `.index()`.
//!
//! `ExternalNodeId` is whatever the provider hands us: an OSM integer id, a
//! string key from a JSON export, and so on.  It is opaque to the core.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Dense 0-based node index assigned by the identifier normalizer.
    /// Max ~4.3 billion nodes.
    pub struct NormalizedId(u32);
}

typed_id! {
    /// Position of a raw feature in the provider's iteration order.  Used in
    /// diagnostics so a skipped feature can be traced back to its source.
    pub struct FeatureId(u32);
}

// ── ExternalNodeId ────────────────────────────────────────────────────────────

/// A node key as supplied by the raw network provider.
///
/// Deserializes from either a JSON number or a JSON string, so both
/// `{"id": 240109189}` and `{"id": "A"}` are accepted.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExternalNodeId {
    Int(i64),
    Str(String),
}

impl fmt::Display for ExternalNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalNodeId::Int(n) => write!(f, "{n}"),
            ExternalNodeId::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for ExternalNodeId {
    fn from(n: i64) -> Self {
        ExternalNodeId::Int(n)
    }
}

impl From<&str> for ExternalNodeId {
    fn from(s: &str) -> Self {
        ExternalNodeId::Str(s.to_owned())
    }
}

impl From<String> for ExternalNodeId {
    fn from(s: String) -> Self {
        ExternalNodeId::Str(s)
    }
}
