//! Static nearest-node index.
//!
//! An R-tree (via `rstar`) over node `[lon, lat]` points, bulk-loaded once in
//! O(N log N).  Each query is O(log N), so resolving M landmarks against N
//! nodes costs O((N + M) log N) rather than the O(N·M) of a linear scan.
//!
//! # Metric
//!
//! Squared planar distance in degree space.  Over a single city the
//! distortion relative to great-circle distance changes only near-ties, and a
//! planar metric makes exact ties reproducible.
//!
//! # Ties
//!
//! When several nodes sit at exactly the same minimum distance the lowest
//! `NormalizedId` wins.  The R-tree yields neighbours in non-decreasing
//! distance order, so all tied candidates are consecutive.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use rr_core::{Coordinate, NormalizedId};

use crate::{SpatialError, SpatialResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a node position with its id.
#[derive(Clone)]
struct NodeEntry {
    point: Coordinate,
    id:    NormalizedId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point.to_array())
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.point.planar_distance_2(Coordinate::from(*point))
    }
}

// ── NodeIndex ─────────────────────────────────────────────────────────────────

/// Read-only spatial index over a node coordinate table.
///
/// `Sync` once built, so batch queries can be spread across threads.
pub struct NodeIndex {
    tree:    RTree<NodeEntry>,
    skipped: usize,
}

impl NodeIndex {
    /// Bulk-load the index from `coords`, where position `i` is the
    /// coordinate of `NormalizedId(i)`.
    ///
    /// Nodes with non-finite coordinates keep their id but are left out of
    /// the index with a warning.
    ///
    /// # Errors
    ///
    /// [`SpatialError::EmptyIndex`] if no node is indexable,
    /// [`SpatialError::TooManyNodes`] if `coords` outgrows `NormalizedId`.
    pub fn build(coords: &[Coordinate]) -> SpatialResult<Self> {
        let mut skipped = 0usize;
        let mut entries: Vec<NodeEntry> = Vec::with_capacity(coords.len());
        for (i, &c) in coords.iter().enumerate() {
            let id = node_id(i, coords.len())?;
            if c.is_finite() {
                entries.push(NodeEntry { point: c, id });
            } else {
                tracing::warn!("node {id} has non-finite coordinate {c}; not indexed");
                skipped += 1;
            }
        }

        if entries.is_empty() {
            return Err(SpatialError::EmptyIndex);
        }

        let tree = RTree::bulk_load(entries);
        tracing::debug!(indexed = tree.size(), skipped, "built node R-tree");
        Ok(Self { tree, skipped })
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Nodes left out of the index because of non-finite coordinates.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Nearest node to `query`, ties broken by lowest id.
    ///
    /// Returns `None` only when `query` is not finite.
    pub fn nearest(&self, query: Coordinate) -> Option<NormalizedId> {
        if !query.is_finite() {
            return None;
        }
        let mut candidates = self.tree.nearest_neighbor_iter_with_distance_2(&query.to_array());
        let (first, best) = candidates.next()?;
        let mut winner = first.id;
        for (entry, d2) in candidates {
            if d2 > best {
                break;
            }
            winner = winner.min(entry.id);
        }
        Some(winner)
    }

    /// Resolve every query independently.  `result[i]` answers `queries[i]`
    /// regardless of which thread computed it.
    pub fn nearest_batch(&self, queries: &[Coordinate]) -> Vec<Option<NormalizedId>> {
        #[cfg(not(feature = "parallel"))]
        {
            queries.iter().map(|&q| self.nearest(q)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            queries.par_iter().map(|&q| self.nearest(q)).collect()
        }
    }
}

/// Id of the node at position `i` of a `len`-node table.
pub(crate) fn node_id(i: usize, len: usize) -> SpatialResult<NormalizedId> {
    NormalizedId::try_from(i).map_err(|_| SpatialError::TooManyNodes(len))
}
