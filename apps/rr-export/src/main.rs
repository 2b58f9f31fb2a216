//! `rr-export` — relabel a road network and write the three text files.
//!
//! Run with:
//!   cargo run -p rr-export --release -- --config export.json
//!   cargo run -p rr-export --release -- --area karachi.osm.pbf --prefix karachi
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

// Country-sized extracts allocate millions of small hash map entries.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use memory_stats::memory_stats;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rr_core::{ExportConfig, NetworkType};
use rr_pipeline::Pipeline;

// ── Memory helper ─────────────────────────────────────────────────────────────

fn mem_mb() -> f64 {
    memory_stats()
        .map(|s| s.physical_mem as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0)
}

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, ValueEnum)]
enum NetworkArg {
    Drive,
    Walk,
    Bike,
    All,
}

impl From<NetworkArg> for NetworkType {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Drive => NetworkType::Drive,
            NetworkArg::Walk => NetworkType::Walk,
            NetworkArg::Bike => NetworkType::Bike,
            NetworkArg::All => NetworkType::All,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Relabel a road network to dense ids and export locations, roads and landmarks"
)]
struct Args {
    /// JSON configuration file; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Network source: a `.json` network or an `.osm.pbf` extract
    #[arg(long)]
    area: Option<PathBuf>,

    /// Directory the text files are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// File name prefix (`<prefix>_roads.txt`, ...)
    #[arg(long)]
    prefix: Option<String>,

    /// Worker threads for landmark resolution (default: all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Edge classes to keep
    #[arg(long, value_enum)]
    network_type: Option<NetworkArg>,
}

impl Args {
    fn into_config(self) -> Result<ExportConfig> {
        let mut config = match &self.config {
            Some(path) => ExportConfig::from_path(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => ExportConfig::default(),
        };
        if let Some(area) = self.area {
            config.area = area;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(prefix) = self.prefix {
            config.prefix = prefix;
        }
        if let Some(threads) = self.threads {
            config.threads = Some(threads);
        }
        if let Some(network_type) = self.network_type {
            config.network_type = network_type.into();
        }
        Ok(config)
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Args::parse().into_config()?;
    config.validate()?;

    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configuring the worker pool")?;
    }
    tracing::info!(
        area = %config.area.display(),
        network_type = ?config.network_type,
        threads = rayon::current_num_threads(),
        "starting export"
    );

    let t0 = Instant::now();
    let pipeline = Pipeline::open(config)?;
    let (paths, report) = pipeline.export()?;

    tracing::info!(
        locations = %paths.locations.display(),
        roads = %paths.roads.display(),
        landmarks = %paths.landmarks.display(),
        nodes = report.nodes,
        edges = report.edges,
        elapsed_s = t0.elapsed().as_secs_f64(),
        mem_mb = mem_mb(),
        "done"
    );
    Ok(())
}
