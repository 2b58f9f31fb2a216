//! Landmark resolution: raw features → `(CanonicalName, NormalizedId)`.
//!
//! # Pipeline
//!
//! ```text
//! features ──① name filter──② canonicalize──③ representative point
//!          ──④ batch nearest (parallel with `parallel`)──⑤ dedup
//! ```
//!
//! Steps ①–③ and ⑤ run on the calling thread in provider order.  Step ④ is
//! the only part that fans out; its results are re-joined by query index,
//! so "first occurrence wins" in ⑤ is independent of thread scheduling.
//!
//! A feature only claims its canonical name once it actually resolved to a
//! node.  If the first "City Hall" has an unusable point, the next one wins.

use rustc_hash::FxHashSet;

use rr_core::{Coordinate, FeatureId, NormalizedId, RawFeature};

use crate::{canonical_name, representative_point, NodeIndex, SpatialError, SpatialResult};

/// One line of the landmarks file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Landmark {
    /// Canonical name; never empty, never contains whitespace.
    pub name: String,
    pub node: NormalizedId,
    /// The feature this landmark came from.
    pub feature: FeatureId,
}

/// What happened to the features that did not become landmarks.
#[derive(Debug, Default, PartialEq)]
pub struct LandmarkReport {
    /// Features read.
    pub features: usize,
    /// Null, blank, or canonicalizing to the empty string.
    pub unnamed: usize,
    /// One [`SpatialError::MalformedGeometry`] per skipped feature.
    pub malformed: Vec<SpatialError>,
    /// Queries the index found no node for.
    pub dropped_queries: usize,
    /// Later occurrences of an already claimed canonical name.
    pub duplicates: usize,
}

/// Deduplicated landmarks in first-occurrence order.
#[derive(Debug, Default)]
pub struct LandmarkSet {
    pub landmarks: Vec<Landmark>,
    pub report:    LandmarkReport,
}

struct Query {
    feature: FeatureId,
    name:    String,
    point:   Coordinate,
}

/// Resolve `features` against `index`.
///
/// Per-feature problems (no name, malformed or non-finite geometry, no
/// nearest node) are logged and counted; they never fail the batch.
///
/// # Errors
///
/// [`SpatialError::TooManyFeatures`] if `features` outgrows `FeatureId`.
pub fn resolve_landmarks(index: &NodeIndex, features: &[RawFeature]) -> SpatialResult<LandmarkSet> {
    let mut report = LandmarkReport { features: features.len(), ..Default::default() };

    // ── ①–③ Prepare queries in provider order ─────────────────────────────
    let mut queries: Vec<Query> = Vec::with_capacity(features.len());
    for (i, feature) in features.iter().enumerate() {
        let id = feature_id(i, features.len())?;

        // Blank names are unnamed; everything else is canonicalized as given.
        let name = match feature.name.as_deref() {
            Some(n) if !n.trim().is_empty() => canonical_name(n),
            _ => {
                report.unnamed += 1;
                continue;
            }
        };
        if name.is_empty() {
            tracing::debug!("feature {id} name {:?} canonicalizes to nothing", feature.name);
            report.unnamed += 1;
            continue;
        }

        match representative_point(&feature.geometry) {
            Ok(point) => queries.push(Query { feature: id, name, point }),
            Err(defect) => {
                let err = SpatialError::MalformedGeometry {
                    feature: id,
                    kind: feature.geometry.kind(),
                    defect,
                };
                tracing::warn!("skipping feature {name}: {err}");
                report.malformed.push(err);
            }
        }
    }

    // ── ④ Batch nearest-node lookup ───────────────────────────────────────
    let points: Vec<Coordinate> = queries.iter().map(|q| q.point).collect();
    let nearest = index.nearest_batch(&points);
    debug_assert_eq!(nearest.len(), queries.len());

    // ── ⑤ Dedup, single owner, provider order ─────────────────────────────
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut landmarks = Vec::new();
    for (query, node) in queries.into_iter().zip(nearest) {
        let Some(node) = node else {
            tracing::warn!(
                "dropping landmark {} (feature {}): no node near {}",
                query.name,
                query.feature,
                query.point
            );
            report.dropped_queries += 1;
            continue;
        };
        if seen.contains(&query.name) {
            report.duplicates += 1;
            continue;
        }
        seen.insert(query.name.clone());
        landmarks.push(Landmark { name: query.name, node, feature: query.feature });
    }

    tracing::info!(
        features = report.features,
        landmarks = landmarks.len(),
        unnamed = report.unnamed,
        malformed = report.malformed.len(),
        dropped = report.dropped_queries,
        duplicates = report.duplicates,
        "resolved landmarks"
    );
    Ok(LandmarkSet { landmarks, report })
}

/// Id of the feature at position `i` of a `len`-feature batch.
pub(crate) fn feature_id(i: usize, len: usize) -> SpatialResult<FeatureId> {
    FeatureId::try_from(i).map_err(|_| SpatialError::TooManyFeatures(len))
}
