//! The `ArtifactWriter` trait.

use rr_graph::Edge;
use rr_spatial::Landmark;

use crate::{OutputPaths, OutputResult};

/// Sink for one export.  Each `write_*` is called exactly once, then
/// [`finish`](Self::finish) makes the result visible.
///
/// A writer dropped without `finish` must leave nothing behind.
pub trait ArtifactWriter {
    /// Write ids `0..node_count`, one per line.
    fn write_locations(&mut self, node_count: usize) -> OutputResult<()>;

    /// Write one `<u> <v> <weight>` line per edge.
    fn write_roads(&mut self, edges: &[Edge]) -> OutputResult<()>;

    /// Write one `<name> <id>` line per landmark.
    fn write_landmarks(&mut self, landmarks: &[Landmark]) -> OutputResult<()>;

    /// Flush and publish all files.
    ///
    /// Idempotent: later calls return the same paths without touching disk.
    fn finish(&mut self) -> OutputResult<OutputPaths>;
}
