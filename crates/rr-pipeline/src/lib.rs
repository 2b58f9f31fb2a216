//! `rr-pipeline` — run one export end to end.
//!
//! # Stages
//!
//! ```text
//! ① fetch network   provider.fetch_network(network_type)
//! ② normalize       external ids → 0..N        (DuplicateNode aborts)
//! ③ project         raw edges → weighted edges (unknown endpoints skipped)
//! ④ index           R-tree over node coords    (EmptyIndex aborts)
//! ⑤ fetch features  provider.fetch_features(tags)
//! ⑥ resolve         features → landmarks       (bad features skipped)
//! ⑦ write           three files, published together
//! ```
//!
//! Nothing touches the output directory before ⑦, and ⑦ itself stages its
//! files, so an aborted run never leaves a partial export.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Stage ⑥ queries the index on Rayon's thread pool.       |
//! | `osm`      | `.osm.pbf` areas are read through `OsmPbfProvider`.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let config = ExportConfig::from_path(Path::new("export.json"))?;
//! let (paths, report) = Pipeline::open(config)?.export()?;
//! ```

pub mod error;
pub mod pipeline;
pub mod report;


pub use error::{PipelineError, PipelineResult};
pub use pipeline::{Artifacts, Pipeline};
pub use report::RunReport;
