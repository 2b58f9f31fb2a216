//! End-of-run counts.

use crate::Artifacts;

/// What a run produced and what it had to skip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub nodes:           usize,
    /// Nodes with non-finite coordinates, kept in locations but not indexed.
    pub unindexed_nodes: usize,
    pub edges:           usize,
    /// Edges dropped for referencing an unknown node.
    pub skipped_edges:   usize,
    pub features:        usize,
    pub unnamed:         usize,
    pub malformed:       usize,
    pub dropped_queries: usize,
    pub duplicates:      usize,
    pub landmarks:       usize,
}

impl RunReport {
    pub fn from_artifacts(artifacts: &Artifacts) -> Self {
        let lm = &artifacts.landmarks.report;
        Self {
            nodes:           artifacts.graph.node_count(),
            unindexed_nodes: artifacts.unindexed_nodes,
            edges:           artifacts.projection.edges.len(),
            skipped_edges:   artifacts.projection.skipped.len(),
            features:        lm.features,
            unnamed:         lm.unnamed,
            malformed:       lm.malformed.len(),
            dropped_queries: lm.dropped_queries,
            duplicates:      lm.duplicates,
            landmarks:       artifacts.landmarks.landmarks.len(),
        }
    }

    /// `true` if any record was skipped along the way.
    pub fn has_skips(&self) -> bool {
        self.unindexed_nodes + self.skipped_edges + self.malformed + self.dropped_queries > 0
    }

    pub fn log(&self) {
        tracing::info!(
            nodes = self.nodes,
            edges = self.edges,
            landmarks = self.landmarks,
            "export summary"
        );
        if self.has_skips() {
            tracing::warn!(
                unindexed_nodes = self.unindexed_nodes,
                skipped_edges = self.skipped_edges,
                malformed = self.malformed,
                dropped_queries = self.dropped_queries,
                "records skipped during export"
            );
        }
        tracing::debug!(
            features = self.features,
            unnamed = self.unnamed,
            duplicates = self.duplicates,
            "feature filtering"
        );
    }
}
