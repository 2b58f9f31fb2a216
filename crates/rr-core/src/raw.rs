//! The shape of what a raw network provider hands to the core.
//!
//! Nothing in here is validated.  Duplicate node ids, dangling edge
//! endpoints, nameless features and broken geometries are all representable;
//! the normalizer, projector and resolver decide what to do with them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Coordinate, ExternalNodeId};

/// One node as yielded by the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    pub id: ExternalNodeId,
    #[serde(flatten)]
    pub coord: Coordinate,
}

impl RawNode {
    pub fn new(id: impl Into<ExternalNodeId>, lon: f64, lat: f64) -> Self {
        Self { id: id.into(), coord: Coordinate::new(lon, lat) }
    }
}

/// One undirected edge.  `length` is in metres when present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawEdge {
    pub u: ExternalNodeId,
    pub v: ExternalNodeId,
    #[serde(default)]
    pub length: Option<f64>,
}

impl RawEdge {
    pub fn new(
        u: impl Into<ExternalNodeId>,
        v: impl Into<ExternalNodeId>,
        length: Option<f64>,
    ) -> Self {
        Self { u: u.into(), v: v.into(), length }
    }
}

/// Nodes and edges in provider iteration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawNetwork {
    pub nodes: Vec<RawNode>,
    pub edges: Vec<RawEdge>,
}

/// Geometry of a tagged feature, GeoJSON style: `{"type": …, "coordinates": …}`
/// with positions as `[lon, lat]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum FeatureGeometry {
    Point([f64; 2]),
    LineString(Vec<[f64; 2]>),
    /// Exterior ring first, then holes.
    Polygon(Vec<Vec<[f64; 2]>>),
    MultiPolygon(Vec<Vec<Vec<[f64; 2]>>>),
}

impl FeatureGeometry {
    pub fn kind(&self) -> &'static str {
        match self {
            FeatureGeometry::Point(_) => "Point",
            FeatureGeometry::LineString(_) => "LineString",
            FeatureGeometry::Polygon(_) => "Polygon",
            FeatureGeometry::MultiPolygon(_) => "MultiPolygon",
        }
    }
}

/// A point of interest.  `name` is `None` when the source had no `name` tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawFeature {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    pub geometry: FeatureGeometry,
}

impl RawFeature {
    /// Convenience constructor for an untagged point feature.
    pub fn point(name: Option<&str>, lon: f64, lat: f64) -> Self {
        Self {
            name: name.map(str::to_owned),
            tags: BTreeMap::new(),
            geometry: FeatureGeometry::Point([lon, lat]),
        }
    }
}
