//! `rr-output` — the three text files a relabeled network is exported as.
//!
//! | File                      | Line format                 | Order                |
//! |---------------------------|-----------------------------|----------------------|
//! | `<prefix>_locations.txt`  | `<id>`                      | ascending `0..N`     |
//! | `<prefix>_roads.txt`      | `<u> <v> <weight>`          | input edge order     |
//! | `<prefix>_landmarks.txt`  | `<canonical_name> <id>`     | first occurrence     |
//!
//! UTF-8, one ASCII space between fields, every line ends in `\n`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rr_output::{ArtifactWriter, OutputPaths, TextWriter};
//!
//! let mut w = TextWriter::new(OutputPaths::new(dir, "karachi"))?;
//! w.write_locations(graph.node_count())?;
//! w.write_roads(&projection.edges)?;
//! w.write_landmarks(&set.landmarks)?;
//! let paths = w.finish()?; // nothing is visible in `dir` before this
//! ```

pub mod error;
pub mod paths;
pub mod reader;
pub mod text;
pub mod writer;


pub use error::{OutputError, OutputResult};
pub use paths::OutputPaths;
pub use reader::{read_artifacts, ArtifactsOnDisk};
pub use text::TextWriter;
pub use writer::ArtifactWriter;
