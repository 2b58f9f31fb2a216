//! Plain-text backend.
//!
//! All three files are staged as hidden temporary files inside the output
//! directory and only renamed into place by [`ArtifactWriter::finish`].
//! Dropping the writer earlier (an error in a later stage, a panic) deletes
//! the staged files, so a failed run leaves no partial export behind.

use std::ffi::OsString;
use std::path::Path;

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use tempfile::NamedTempFile;

use rr_graph::Edge;
use rr_spatial::Landmark;

use crate::writer::ArtifactWriter;
use crate::{OutputError, OutputPaths, OutputResult};

const LOCATIONS: usize = 0;
const ROADS: usize = 1;
const LANDMARKS: usize = 2;
const FILES: [&str; 3] = ["locations", "roads", "landmarks"];

struct Staged {
    out:     Writer<NamedTempFile>,
    written: bool,
    lines:   usize,
}

/// Writes the space-separated export files.
pub struct TextWriter {
    paths:     OutputPaths,
    staged:    Option<[Staged; 3]>,
    published: bool,
}

impl TextWriter {
    /// Create the output directory if needed and stage three empty files in it.
    pub fn new(paths: OutputPaths) -> OutputResult<Self> {
        std::fs::create_dir_all(&paths.dir)?;
        let staged = [
            stage(&paths.dir, &paths.locations)?,
            stage(&paths.dir, &paths.roads)?,
            stage(&paths.dir, &paths.landmarks)?,
        ];
        Ok(Self { paths, staged: Some(staged), published: false })
    }

    pub fn paths(&self) -> &OutputPaths {
        &self.paths
    }

    fn open(&mut self, slot: usize) -> OutputResult<&mut Staged> {
        let staged = self
            .staged
            .as_mut()
            .ok_or(OutputError::AlreadyWritten(FILES[slot]))?;
        let file = &mut staged[slot];
        if file.written {
            return Err(OutputError::AlreadyWritten(FILES[slot]));
        }
        file.written = true;
        Ok(file)
    }
}

impl ArtifactWriter for TextWriter {
    fn write_locations(&mut self, node_count: usize) -> OutputResult<()> {
        let file = self.open(LOCATIONS)?;
        for id in 0..node_count {
            file.out.write_record([id.to_string()])?;
        }
        file.lines = node_count;
        Ok(())
    }

    fn write_roads(&mut self, edges: &[Edge]) -> OutputResult<()> {
        let file = self.open(ROADS)?;
        for e in edges {
            file.out.write_record([e.u.0.to_string(), e.v.0.to_string(), e.weight.to_string()])?;
        }
        file.lines = edges.len();
        Ok(())
    }

    fn write_landmarks(&mut self, landmarks: &[Landmark]) -> OutputResult<()> {
        let file = self.open(LANDMARKS)?;
        for l in landmarks {
            let id = l.node.0.to_string();
            file.out.write_record([l.name.as_str(), id.as_str()])?;
        }
        file.lines = landmarks.len();
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<OutputPaths> {
        let Some(staged) = self.staged.take() else {
            return if self.published {
                Ok(self.paths.clone())
            } else {
                Err(OutputError::Abandoned)
            };
        };

        let targets = self.paths.all();
        let mut persisted: Vec<&Path> = Vec::with_capacity(3);
        for (slot, file) in staged.into_iter().enumerate() {
            let target = targets[slot];
            let lines = file.lines;
            if let Err(e) = publish(file.out, target) {
                for done in persisted {
                    if let Err(rm) = std::fs::remove_file(done) {
                        tracing::warn!(path = %done.display(), error = %rm, "could not roll back output file");
                    }
                }
                return Err(e);
            }
            tracing::debug!(path = %target.display(), lines, "wrote {}", FILES[slot]);
            persisted.push(target);
        }

        self.published = true;
        tracing::info!(dir = %self.paths.dir.display(), "export files written");
        Ok(self.paths.clone())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A hidden temp file next to `target`, wrapped in a space-separated writer.
fn stage(dir: &Path, target: &Path) -> OutputResult<Staged> {
    let mut prefix = OsString::from(".");
    if let Some(name) = target.file_name() {
        prefix.push(name);
    }
    prefix.push(".");
    let tmp = tempfile::Builder::new().prefix(&prefix).suffix(".tmp").tempfile_in(dir)?;

    let out = WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(tmp);
    Ok(Staged { out, written: false, lines: 0 })
}

fn publish(out: Writer<NamedTempFile>, target: &Path) -> OutputResult<()> {
    let tmp = out.into_inner().map_err(|e| OutputError::Io(e.into_error()))?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| OutputError::Persist {
        path:   target.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
