//! Identifier normalizer: external node keys → dense `NormalizedId`s.
//!
//! # Assignment order
//!
//! Ids are handed out in the order nodes are first seen, so the first node
//! the provider yields becomes `NormalizedId(0)`.  Feeding the same node
//! sequence twice produces the same mapping, which keeps the output files
//! byte-for-byte reproducible for a given extract.
//!
//! # Layout
//!
//! The graph keeps two `Vec`s indexed by `NormalizedId` (coordinate and
//! original key) plus an `FxHashMap` for the reverse lookup the edge
//! projector needs.  Nothing is sorted; the vectors are append-only while
//! the normalizer runs and frozen afterwards.

use rustc_hash::FxHashMap;

use rr_core::{Coordinate, ExternalNodeId, NormalizedId, RawNode};

use crate::{GraphError, GraphResult};

// ── NormalizedGraph ───────────────────────────────────────────────────────────

/// The bijection between external ids and `[0, N)` plus the coordinate
/// table.  Build with [`IdNormalizer`] or [`normalize`].
#[derive(Debug)]
pub struct NormalizedGraph {
    /// Position of each node.  Indexed by `NormalizedId`.
    pub coords: Vec<Coordinate>,

    /// Original key of each node.  Indexed by `NormalizedId`.
    pub external: Vec<ExternalNodeId>,

    lookup: FxHashMap<ExternalNodeId, NormalizedId>,
}

impl NormalizedGraph {
    pub fn node_count(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Resolve an external key, or `None` if the provider never yielded it.
    #[inline]
    pub fn get(&self, id: &ExternalNodeId) -> Option<NormalizedId> {
        self.lookup.get(id).copied()
    }

    #[inline]
    pub fn coord(&self, id: NormalizedId) -> Coordinate {
        self.coords[id.index()]
    }

    pub fn external_id(&self, id: NormalizedId) -> &ExternalNodeId {
        &self.external[id.index()]
    }

    /// All ids in ascending order, `0..N`.  `N` fits in `u32`; the
    /// normalizer refuses to grow past it.
    pub fn ids(&self) -> impl Iterator<Item = NormalizedId> + '_ {
        (0..self.coords.len()).map(|i| NormalizedId(i as u32))
    }
}

// ── IdNormalizer ──────────────────────────────────────────────────────────────

/// Assigns `NormalizedId`s incrementally, then [`finish`](Self::finish) into
/// a [`NormalizedGraph`].
///
/// # Example
///
/// ```
/// use rr_core::{Coordinate, NormalizedId};
/// use rr_graph::IdNormalizer;
///
/// let mut n = IdNormalizer::new();
/// let a = n.insert("A".into(), Coordinate::new(0.0, 0.0)).unwrap();
/// let b = n.insert("B".into(), Coordinate::new(1.0, 0.0)).unwrap();
/// // Repeating a node with the same coordinate is a no-op.
/// assert_eq!(n.insert("A".into(), Coordinate::new(0.0, 0.0)).unwrap(), a);
/// assert_eq!((a, b), (NormalizedId(0), NormalizedId(1)));
/// assert_eq!(n.finish().node_count(), 2);
/// ```
pub struct IdNormalizer {
    coords:   Vec<Coordinate>,
    external: Vec<ExternalNodeId>,
    lookup:   FxHashMap<ExternalNodeId, NormalizedId>,
}

impl IdNormalizer {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Pre-allocate for the expected node count to avoid rehashing when
    /// loading a city-sized extract.
    pub fn with_capacity(nodes: usize) -> Self {
        let mut lookup = FxHashMap::default();
        lookup.reserve(nodes);
        Self {
            coords: Vec::with_capacity(nodes),
            external: Vec::with_capacity(nodes),
            lookup,
        }
    }

    /// Map `id` to its `NormalizedId`, assigning the next free one on first
    /// sight.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateNode`] if `id` was seen before with a
    /// different coordinate (compared bit-for-bit).
    pub fn insert(&mut self, id: ExternalNodeId, coord: Coordinate) -> GraphResult<NormalizedId> {
        if let Some(&existing) = self.lookup.get(&id) {
            let first = self.coords[existing.index()];
            if first.same_bits(coord) {
                return Ok(existing);
            }
            return Err(GraphError::DuplicateNode { id, first, second: coord });
        }

        let next = self.coords.len();
        let nid = NormalizedId::try_from(next).map_err(|_| GraphError::TooManyNodes(next))?;
        self.coords.push(coord);
        self.external.push(id.clone());
        self.lookup.insert(id, nid);
        Ok(nid)
    }

    pub fn node_count(&self) -> usize {
        self.coords.len()
    }

    pub fn finish(self) -> NormalizedGraph {
        debug_assert_eq!(self.coords.len(), self.external.len());
        debug_assert_eq!(self.coords.len(), self.lookup.len());
        NormalizedGraph {
            coords:   self.coords,
            external: self.external,
            lookup:   self.lookup,
        }
    }
}

impl Default for IdNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

// ── One-shot entry point ──────────────────────────────────────────────────────

/// Normalize a node sequence in provider order.
///
/// Aborts on the first conflicting duplicate; the error carries the
/// offending id.
pub fn normalize(nodes: &[RawNode]) -> GraphResult<NormalizedGraph> {
    let mut normalizer = IdNormalizer::with_capacity(nodes.len());
    let mut repeats = 0usize;

    for node in nodes {
        let before = normalizer.node_count();
        normalizer.insert(node.id.clone(), node.coord)?;
        if normalizer.node_count() == before {
            repeats += 1;
        }
    }

    if repeats > 0 {
        tracing::debug!(repeats, "ignored repeated nodes with identical coordinates");
    }
    let graph = normalizer.finish();
    tracing::info!(nodes = graph.node_count(), "normalized node identifiers");
    Ok(graph)
}
