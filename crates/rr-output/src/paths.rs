//! Where the three files go.

use std::path::{Path, PathBuf};

/// Final locations of one export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub dir:       PathBuf,
    pub locations: PathBuf,
    pub roads:     PathBuf,
    pub landmarks: PathBuf,
}

impl OutputPaths {
    /// `<dir>/<prefix>_locations.txt`, `<dir>/<prefix>_roads.txt`,
    /// `<dir>/<prefix>_landmarks.txt`.
    pub fn new(dir: &Path, prefix: &str) -> Self {
        Self {
            dir:       dir.to_path_buf(),
            locations: dir.join(format!("{prefix}_locations.txt")),
            roads:     dir.join(format!("{prefix}_roads.txt")),
            landmarks: dir.join(format!("{prefix}_landmarks.txt")),
        }
    }

    pub fn all(&self) -> [&Path; 3] {
        [&self.locations, &self.roads, &self.landmarks]
    }
}
