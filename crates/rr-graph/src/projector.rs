//! Edge projector: raw edges → weighted edges over `NormalizedId`s.
//!
//! # Weight rule
//!
//! `weight = round(length)` with halves rounded away from zero (`4.5 → 5`,
//! `2.5 → 3`), when `length` is present, finite and non-negative.  Anything
//! else gets [`DEFAULT_WEIGHT`].  Lengths past `u64::MAX` saturate.
//!
//! Edges are emitted one per input edge in input order.  Parallel edges and
//! self-loops pass through untouched.

use rr_core::{NormalizedId, RawEdge};

use crate::{GraphError, NormalizedGraph};

/// Weight used when an edge carries no usable length.
pub const DEFAULT_WEIGHT: u64 = 1;

/// An undirected edge between two normalized nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub u:      NormalizedId,
    pub v:      NormalizedId,
    pub weight: u64,
}

/// Result of projecting an edge list.
#[derive(Debug, Default)]
pub struct EdgeProjection {
    /// Surviving edges in input order.
    pub edges: Vec<Edge>,

    /// One [`GraphError::UnknownNode`] per skipped edge.
    pub skipped: Vec<GraphError>,
}

/// Integer weight for an optional length attribute.
#[inline]
pub fn edge_weight(length: Option<f64>) -> u64 {
    match length {
        // `f64::round` rounds half away from zero; `as` saturates.
        Some(len) if len.is_finite() && len >= 0.0 => len.round() as u64,
        _ => DEFAULT_WEIGHT,
    }
}

/// Rewrite `edges` in terms of `graph`'s ids.
///
/// Edges with an endpoint missing from `graph` are skipped with a warning and
/// recorded in [`EdgeProjection::skipped`]; they never abort the batch.
pub fn project_edges(graph: &NormalizedGraph, edges: &[RawEdge]) -> EdgeProjection {
    let mut out = EdgeProjection {
        edges:   Vec::with_capacity(edges.len()),
        skipped: Vec::new(),
    };

    for (i, raw) in edges.iter().enumerate() {
        let u = graph.get(&raw.u);
        let v = graph.get(&raw.v);
        match (u, v) {
            (Some(u), Some(v)) => out.edges.push(Edge { u, v, weight: edge_weight(raw.length) }),
            _ => {
                let missing = if u.is_none() { &raw.u } else { &raw.v };
                let err = GraphError::UnknownNode { edge: i, id: missing.clone() };
                tracing::warn!("skipping edge: {err}");
                out.skipped.push(err);
            }
        }
    }

    tracing::info!(
        edges = out.edges.len(),
        skipped = out.skipped.len(),
        "projected edges onto normalized ids"
    );
    out
}
