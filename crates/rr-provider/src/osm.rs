//! OSM PBF provider, enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use rr_core::NetworkType;
//! use rr_provider::{NetworkProvider, OsmPbfProvider};
//!
//! let provider = OsmPbfProvider::new(Path::new("karachi.osm.pbf"))?;
//! let network = provider.fetch_network(NetworkType::Drive)?;
//! ```
//!
//! # What is loaded
//!
//! The network is the *simplified* road graph: a way's nodes become graph
//! nodes only where something happens there (the way starts or ends, or the
//! node is shared with another road way or repeated within one).  The nodes
//! in between are folded into the edge, whose `length` is the haversine sum
//! of its segments in metres.  Graph nodes are emitted in file order.
//!
//! Features are tagged nodes (→ `Point`) and tagged ways (closed → `Polygon`,
//! open → `LineString`).  Relations are ignored.
//!
//! # Memory note
//!
//! Both calls buffer every OSM node position in an `FxHashMap<i64, _>`
//! because ways reference nodes by id.  The map is dropped before returning.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use osmpbf::{Element, ElementReader};
use rustc_hash::{FxHashMap, FxHashSet};

use rr_core::{
    Coordinate, ExternalNodeId, FeatureGeometry, NetworkType, RawEdge, RawFeature, RawNetwork,
    RawNode, TagFilters,
};

use crate::{NetworkProvider, ProviderError, ProviderResult};

/// Reads networks and features from a local `.osm.pbf` extract.
pub struct OsmPbfProvider {
    path: PathBuf,
}

impl OsmPbfProvider {
    /// Fails early if `path` cannot be read; parsing happens per fetch.
    pub fn new(path: &Path) -> ProviderResult<Self> {
        std::fs::metadata(path)?;
        Ok(Self { path: path.to_path_buf() })
    }

    fn reader(&self) -> ProviderResult<ElementReader<std::io::BufReader<std::fs::File>>> {
        ElementReader::from_path(&self.path).map_err(|e| ProviderError::Osm(e.to_string()))
    }
}

impl NetworkProvider for OsmPbfProvider {
    fn name(&self) -> &'static str {
        "osm_pbf"
    }

    fn fetch_network(&self, network_type: NetworkType) -> ProviderResult<RawNetwork> {
        // ── Pass: node positions (with file order) + admitted road ways ──
        let mut positions: FxHashMap<i64, (usize, Coordinate)> = FxHashMap::default();
        let mut road_ways: Vec<Vec<i64>> = Vec::new();

        self.reader()?
            .for_each(|elem| match elem {
                Element::Node(n) => {
                    let seq = positions.len();
                    positions.insert(n.id(), (seq, Coordinate::new(n.lon(), n.lat())));
                }
                Element::DenseNode(n) => {
                    let seq = positions.len();
                    positions.insert(n.id(), (seq, Coordinate::new(n.lon(), n.lat())));
                }
                Element::Way(w) => {
                    let admitted = w
                        .tags()
                        .find(|(k, _)| *k == "highway")
                        .is_some_and(|(_, v)| network_type.admits(v));
                    if admitted {
                        road_ways.push(w.refs().collect());
                    }
                }
                Element::Relation(_) => {}
            })
            .map_err(|e| ProviderError::Osm(e.to_string()))?;

        let network = simplify(&positions, &road_ways);
        tracing::info!(
            osm_nodes = positions.len(),
            road_ways = road_ways.len(),
            nodes = network.nodes.len(),
            edges = network.edges.len(),
            "simplified OSM road network"
        );
        Ok(network)
    }

    fn fetch_features(&self, filters: &TagFilters) -> ProviderResult<Vec<RawFeature>> {
        let mut positions: FxHashMap<i64, Coordinate> = FxHashMap::default();
        let mut features: Vec<RawFeature> = Vec::new();
        let mut pending_ways: Vec<(BTreeMap<String, String>, Vec<i64>)> = Vec::new();

        self.reader()?
            .for_each(|elem| match elem {
                Element::Node(n) => {
                    let pos = Coordinate::new(n.lon(), n.lat());
                    positions.insert(n.id(), pos);
                    if let Some(tags) = matching_tags(n.tags(), filters) {
                        features.push(feature(tags, FeatureGeometry::Point(pos.to_array())));
                    }
                }
                Element::DenseNode(n) => {
                    let pos = Coordinate::new(n.lon(), n.lat());
                    positions.insert(n.id(), pos);
                    if let Some(tags) = matching_tags(n.tags(), filters) {
                        features.push(feature(tags, FeatureGeometry::Point(pos.to_array())));
                    }
                }
                Element::Way(w) => {
                    if let Some(tags) = matching_tags(w.tags(), filters) {
                        pending_ways.push((tags, w.refs().collect()));
                    }
                }
                Element::Relation(_) => {}
            })
            .map_err(|e| ProviderError::Osm(e.to_string()))?;

        // Ways follow nodes in a PBF, so appending keeps file order.
        for (tags, refs) in pending_ways {
            features.push(feature(tags, way_geometry(&positions, &refs)));
        }

        tracing::info!(features = features.len(), "collected tagged OSM features");
        Ok(features)
    }
}

// ── Simplification ────────────────────────────────────────────────────────────

/// Collapse road ways into a graph whose nodes are way endpoints and
/// intersections.  Refs with no known position split a way into separate
/// runs, as if the way had been clipped there.
fn simplify(positions: &FxHashMap<i64, (usize, Coordinate)>, road_ways: &[Vec<i64>]) -> RawNetwork {
    let runs: Vec<&[i64]> = road_ways
        .iter()
        .flat_map(|refs| refs.split(|id| !positions.contains_key(id)))
        .filter(|run| run.len() >= 2)
        .collect();

    let mut seen: FxHashMap<i64, u32> = FxHashMap::default();
    for run in &runs {
        for &id in *run {
            *seen.entry(id).or_insert(0) += 1;
        }
    }

    let mut graph_nodes: FxHashSet<i64> = FxHashSet::default();
    for run in &runs {
        graph_nodes.insert(run[0]);
        graph_nodes.insert(run[run.len() - 1]);
    }
    graph_nodes.extend(seen.iter().filter(|&(_, &count)| count >= 2).map(|(&id, _)| id));

    let pos = |id: i64| positions[&id].1;

    let mut edges = Vec::new();
    for run in &runs {
        let mut start = run[0];
        let mut length = 0.0;
        for pair in run.windows(2) {
            length += pos(pair[0]).distance_m(pos(pair[1]));
            if graph_nodes.contains(&pair[1]) {
                edges.push(RawEdge::new(start, pair[1], Some(length)));
                start = pair[1];
                length = 0.0;
            }
        }
    }

    let mut ordered: Vec<(usize, i64)> =
        graph_nodes.iter().map(|&id| (positions[&id].0, id)).collect();
    ordered.sort_unstable();
    let nodes = ordered
        .into_iter()
        .map(|(_, id)| RawNode { id: ExternalNodeId::Int(id), coord: pos(id) })
        .collect();

    RawNetwork { nodes, edges }
}

// ── Feature helpers ───────────────────────────────────────────────────────────

/// Owned tags if the element has any and they pass `filters`.
fn matching_tags<'a>(
    tags: impl Iterator<Item = (&'a str, &'a str)>,
    filters: &TagFilters,
) -> Option<BTreeMap<String, String>> {
    let tags: Vec<(&str, &str)> = tags.collect();
    if tags.is_empty() || !filters.matches_pairs(tags.iter().copied()) {
        return None;
    }
    Some(tags.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect())
}

fn feature(tags: BTreeMap<String, String>, geometry: FeatureGeometry) -> RawFeature {
    RawFeature { name: tags.get("name").cloned(), tags, geometry }
}

/// Closed ways with at least four refs are areas; everything else is a line.
/// Unknown refs are dropped, which may leave an empty geometry for the
/// resolver to reject.
fn way_geometry(positions: &FxHashMap<i64, Coordinate>, refs: &[i64]) -> FeatureGeometry {
    let coords: Vec<[f64; 2]> =
        refs.iter().filter_map(|id| positions.get(id)).map(|c| c.to_array()).collect();
    let closed = refs.len() >= 4 && refs.first() == refs.last();
    if closed && coords.len() >= 4 {
        FeatureGeometry::Polygon(vec![coords])
    } else {
        FeatureGeometry::LineString(coords)
    }
}
