//! Read an export back the way the downstream graph tool loads it.
//!
//! Locations become a node set, roads whose endpoints are not in that set
//! are ignored (and counted), and landmarks become a name → node map in
//! file order.  Anything that does not parse is an error naming the file and
//! line.

use std::collections::BTreeSet;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord};

use rr_core::NormalizedId;
use rr_graph::Edge;

use crate::{OutputError, OutputPaths, OutputResult};

/// Contents of an export as read from disk.
#[derive(Debug, Default, PartialEq)]
pub struct ArtifactsOnDisk {
    pub nodes:         BTreeSet<NormalizedId>,
    pub roads:         Vec<Edge>,
    /// Road lines with an endpoint missing from `nodes`.
    pub ignored_roads: usize,
    pub landmarks:     Vec<(String, NormalizedId)>,
}

pub fn read_artifacts(paths: &OutputPaths) -> OutputResult<ArtifactsOnDisk> {
    let mut out = ArtifactsOnDisk::default();

    for_each_line(&paths.locations, 1, |rec, line| {
        out.nodes.insert(NormalizedId(field(&paths.locations, line, rec, 0)?));
        Ok(())
    })?;

    for_each_line(&paths.roads, 3, |rec, line| {
        let edge = Edge {
            u:      NormalizedId(field(&paths.roads, line, rec, 0)?),
            v:      NormalizedId(field(&paths.roads, line, rec, 1)?),
            weight: field(&paths.roads, line, rec, 2)?,
        };
        if out.nodes.contains(&edge.u) && out.nodes.contains(&edge.v) {
            out.roads.push(edge);
        } else {
            out.ignored_roads += 1;
        }
        Ok(())
    })?;

    for_each_line(&paths.landmarks, 2, |rec, line| {
        let name = rec.get(0).unwrap_or_default().to_owned();
        out.landmarks.push((name, NormalizedId(field(&paths.landmarks, line, rec, 1)?)));
        Ok(())
    })?;

    if out.ignored_roads > 0 {
        tracing::warn!(count = out.ignored_roads, "roads reference unknown nodes");
    }
    Ok(out)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn for_each_line(
    path: &Path,
    fields: usize,
    mut f: impl FnMut(&StringRecord, u64) -> OutputResult<()>,
) -> OutputResult<()> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_path(path)?;

    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != fields {
            return Err(OutputError::Malformed {
                path: path.to_path_buf(),
                line,
                reason: format!("expected {fields} fields, found {}", record.len()),
            });
        }
        f(&record, line)?;
    }
    Ok(())
}

fn field<T: FromStr>(path: &Path, line: u64, record: &StringRecord, i: usize) -> OutputResult<T> {
    let raw = record.get(i).unwrap_or_default();
    raw.parse().map_err(|_| OutputError::Malformed {
        path: path.to_path_buf(),
        line,
        reason: format!("field {} is not a non-negative integer: {raw:?}", i + 1),
    })
}
