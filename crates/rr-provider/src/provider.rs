//! The provider seam.

use rr_core::{ExportConfig, NetworkType, ProviderKind, RawFeature, RawNetwork, TagFilters};

use crate::{JsonProvider, ProviderError, ProviderResult};

/// A source of raw road networks and tagged features for one area.
///
/// Both calls return data in the provider's own iteration order; everything
/// downstream relies on that order being stable for the same input.
pub trait NetworkProvider {
    /// Short name for log lines.
    fn name(&self) -> &'static str;

    /// Nodes and undirected edges, restricted to `network_type`.
    fn fetch_network(&self, network_type: NetworkType) -> ProviderResult<RawNetwork>;

    /// Features matching `tags`.  Features without a name are still
    /// returned; the resolver decides what to do with them.
    fn fetch_features(&self, tags: &TagFilters) -> ProviderResult<Vec<RawFeature>>;
}

/// Open the provider selected by `config.area` / `config.provider`.
pub fn open_provider(config: &ExportConfig) -> ProviderResult<Box<dyn NetworkProvider>> {
    let kind = config.provider_kind().map_err(|e| ProviderError::Config(e.to_string()))?;
    tracing::info!(area = %config.area.display(), ?kind, "opening provider");

    match kind {
        ProviderKind::Json => Ok(Box::new(JsonProvider::from_path(&config.area)?)),

        #[cfg(feature = "osm")]
        ProviderKind::OsmPbf => Ok(Box::new(crate::OsmPbfProvider::new(&config.area)?)),

        #[cfg(not(feature = "osm"))]
        ProviderKind::OsmPbf => Err(ProviderError::Unsupported("osm_pbf")),
    }
}
