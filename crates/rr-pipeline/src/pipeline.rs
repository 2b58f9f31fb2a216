//! The [`Pipeline`] driver.

use std::time::Instant;

use rr_core::ExportConfig;
use rr_graph::{normalize, project_edges, EdgeProjection, NormalizedGraph};
use rr_output::{ArtifactWriter, OutputPaths, TextWriter};
use rr_provider::{open_provider, NetworkProvider};
use rr_spatial::{resolve_landmarks, LandmarkSet, NodeIndex};

use crate::{PipelineResult, RunReport};

/// Everything an export writes, still in memory.
#[derive(Debug)]
pub struct Artifacts {
    pub graph:           NormalizedGraph,
    pub projection:      EdgeProjection,
    pub landmarks:       LandmarkSet,
    /// Nodes left out of the spatial index.
    pub unindexed_nodes: usize,
}

/// One configured export: a provider plus where to write.
pub struct Pipeline {
    config:   ExportConfig,
    provider: Box<dyn NetworkProvider>,
}

impl Pipeline {
    /// Validate `config` and open the provider it names.
    pub fn open(config: ExportConfig) -> PipelineResult<Self> {
        config.validate()?;
        let provider = open_provider(&config)?;
        Ok(Self { config, provider })
    }

    /// Use an already constructed provider.  `config.area` and
    /// `config.provider` are ignored.
    pub fn with_provider(config: ExportConfig, provider: Box<dyn NetworkProvider>) -> Self {
        Self { config, provider }
    }

    /// Stages ①–⑥: fetch, relabel and resolve, without touching disk.
    pub fn relabel(&self) -> PipelineResult<Artifacts> {
        let t0 = Instant::now();

        // ── ① Fetch network ───────────────────────────────────────────────
        let raw = self.provider.fetch_network(self.config.network_type)?;
        tracing::info!(
            provider = self.provider.name(),
            nodes = raw.nodes.len(),
            edges = raw.edges.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "fetched network"
        );

        // ── ② Normalize ───────────────────────────────────────────────────
        let graph = normalize(&raw.nodes)?;

        // ── ③ Project ─────────────────────────────────────────────────────
        let projection = project_edges(&graph, &raw.edges);
        drop(raw);

        // ── ④ Index ───────────────────────────────────────────────────────
        let t_index = Instant::now();
        let index = NodeIndex::build(&graph.coords)?;
        tracing::info!(
            indexed = index.len(),
            skipped = index.skipped(),
            elapsed_ms = t_index.elapsed().as_millis() as u64,
            "built node index"
        );

        // ── ⑤ Fetch features ──────────────────────────────────────────────
        let features = self.provider.fetch_features(&self.config.tags)?;

        // ── ⑥ Resolve ─────────────────────────────────────────────────────
        let t_resolve = Instant::now();
        let landmarks = resolve_landmarks(&index, &features)?;
        tracing::info!(
            elapsed_ms = t_resolve.elapsed().as_millis() as u64,
            total_ms = t0.elapsed().as_millis() as u64,
            "relabel complete"
        );

        Ok(Artifacts { graph, projection, landmarks, unindexed_nodes: index.skipped() })
    }

    /// Stage ⑦ with an arbitrary writer.
    pub fn write<W: ArtifactWriter>(
        &self,
        artifacts: &Artifacts,
        writer: &mut W,
    ) -> PipelineResult<OutputPaths> {
        writer.write_locations(artifacts.graph.node_count())?;
        writer.write_roads(&artifacts.projection.edges)?;
        writer.write_landmarks(&artifacts.landmarks.landmarks)?;
        Ok(writer.finish()?)
    }

    /// Run every stage and publish the three text files under
    /// `config.output_dir`.
    pub fn export(&self) -> PipelineResult<(OutputPaths, RunReport)> {
        let artifacts = self.relabel()?;

        let paths = OutputPaths::new(&self.config.output_dir, &self.config.prefix);
        let mut writer = TextWriter::new(paths)?;
        let paths = self.write(&artifacts, &mut writer)?;

        let report = RunReport::from_artifacts(&artifacts);
        report.log();
        Ok((paths, report))
    }
}
