//! JSON network provider.
//!
//! # Format
//!
//! ```json
//! {
//!   "nodes":    [ {"id": "A", "lon": 0.0, "lat": 0.0}, … ],
//!   "edges":    [ {"u": "A", "v": "B", "length": 100.0, "highway": "primary"}, … ],
//!   "features": [ {"name": "Test Spot", "tags": {"amenity": "hospital"},
//!                  "geometry": {"type": "Point", "coordinates": [0.1, 0.1]}}, … ]
//! }
//! ```
//!
//! Ids may be numbers or strings.  `length` and `highway` are optional; an
//! edge without `highway` is kept for every network type.  Nodes are passed
//! through unfiltered, duplicates and all.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use rr_core::{ExternalNodeId, NetworkType, RawEdge, RawFeature, RawNetwork, RawNode, TagFilters};

use crate::{NetworkProvider, ProviderResult};

#[derive(Deserialize)]
struct JsonEdge {
    u:       ExternalNodeId,
    v:       ExternalNodeId,
    #[serde(default)]
    length:  Option<f64>,
    #[serde(default)]
    highway: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonDocument {
    #[serde(default)]
    nodes:    Vec<RawNode>,
    #[serde(default)]
    edges:    Vec<JsonEdge>,
    #[serde(default)]
    features: Vec<RawFeature>,
}

/// Serves a network that was extracted to JSON ahead of time.
pub struct JsonProvider {
    doc: JsonDocument,
}

impl JsonProvider {
    pub fn from_path(path: &Path) -> ProviderResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Like [`from_path`](Self::from_path) but accepts any `Read` source.
    pub fn from_reader<R: Read>(reader: R) -> ProviderResult<Self> {
        let doc: JsonDocument = serde_json::from_reader(reader)?;
        tracing::debug!(
            nodes = doc.nodes.len(),
            edges = doc.edges.len(),
            features = doc.features.len(),
            "parsed JSON network"
        );
        Ok(Self { doc })
    }
}

impl NetworkProvider for JsonProvider {
    fn name(&self) -> &'static str {
        "json"
    }

    fn fetch_network(&self, network_type: NetworkType) -> ProviderResult<RawNetwork> {
        let edges: Vec<RawEdge> = self
            .doc
            .edges
            .iter()
            .filter(|e| e.highway.as_deref().is_none_or(|h| network_type.admits(h)))
            .map(|e| RawEdge { u: e.u.clone(), v: e.v.clone(), length: e.length })
            .collect();

        let filtered = self.doc.edges.len() - edges.len();
        if filtered > 0 {
            tracing::debug!(filtered, ?network_type, "dropped edges outside network type");
        }
        Ok(RawNetwork { nodes: self.doc.nodes.clone(), edges })
    }

    fn fetch_features(&self, tags: &TagFilters) -> ProviderResult<Vec<RawFeature>> {
        Ok(self
            .doc
            .features
            .iter()
            .filter(|f| tags.matches(&f.tags))
            .cloned()
            .collect())
    }
}
