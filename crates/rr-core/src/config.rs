//! Export configuration.
//!
//! Loaded from a JSON file by the application crate (every field has a
//! default, so `{}` is a valid file) and then patched with command-line
//! overrides before being handed to the pipeline.
//!
//! ```json
//! {
//!   "area": "karachi.osm.pbf",
//!   "network_type": "drive",
//!   "tags": { "amenity": ["hospital", "police"], "tourism": [] },
//!   "output_dir": "text_files",
//!   "prefix": "karachi",
//!   "threads": 8
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

// ── NetworkType ───────────────────────────────────────────────────────────────

/// Which edge classes the provider keeps, keyed on the OSM `highway` value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkType {
    #[default]
    Drive,
    Walk,
    Bike,
    All,
}

impl NetworkType {
    /// `true` if an edge tagged `highway=<highway>` belongs to this network.
    pub fn admits(self, highway: &str) -> bool {
        // Never part of any routable network.
        if matches!(
            highway,
            "abandoned" | "construction" | "planned" | "proposed" | "razed"
                | "platform" | "raceway" | "bus_guideway" | "no"
        ) {
            return false;
        }
        match self {
            NetworkType::All => true,
            NetworkType::Drive => !matches!(
                highway,
                "footway" | "path" | "cycleway" | "pedestrian" | "steps"
                    | "track" | "bridleway" | "corridor" | "elevator"
                    | "escalator" | "service"
            ),
            NetworkType::Walk => !matches!(
                highway,
                "motorway" | "motorway_link" | "trunk" | "trunk_link" | "cycleway"
            ),
            NetworkType::Bike => !matches!(
                highway,
                "motorway" | "motorway_link" | "footway" | "steps" | "corridor"
                    | "elevator" | "escalator"
            ),
        }
    }
}

// ── ProviderKind ──────────────────────────────────────────────────────────────

/// Which raw network provider reads `area`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// A JSON document with `nodes`, `edges` and `features` arrays.
    Json,
    /// An OpenStreetMap `.osm.pbf` extract.
    OsmPbf,
}

impl ProviderKind {
    /// Guess the provider from a file name: `*.pbf` → OSM, `*.json` /
    /// `*.geojson` → JSON.
    pub fn infer(area: &Path) -> Option<Self> {
        let name = area.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".pbf") {
            Some(ProviderKind::OsmPbf)
        } else if name.ends_with(".json") || name.ends_with(".geojson") {
            Some(ProviderKind::Json)
        } else {
            None
        }
    }
}

// ── TagFilters ────────────────────────────────────────────────────────────────

/// Category → accepted values, e.g. `amenity → [hospital, police]`.
///
/// A feature matches if any configured category key is present in its tags
/// with one of the listed values.  An empty list accepts any value of that
/// key, and an empty map accepts every feature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagFilters(pub BTreeMap<String, Vec<String>>);

impl TagFilters {
    pub fn matches(&self, tags: &BTreeMap<String, String>) -> bool {
        self.matches_pairs(tags.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Same as [`matches`](Self::matches) for borrowed tag iterators, which is
    /// what PBF readers hand out.
    pub fn matches_pairs<'a>(&self, tags: impl IntoIterator<Item = (&'a str, &'a str)>) -> bool {
        if self.0.is_empty() {
            return true;
        }
        tags.into_iter().any(|(k, v)| match self.0.get(k) {
            Some(values) => values.is_empty() || values.iter().any(|accepted| accepted == v),
            None => false,
        })
    }
}

impl Default for TagFilters {
    /// Major landmarks and main roads only.
    fn default() -> Self {
        let table: [(&str, &[&str]); 6] = [
            ("amenity", &[
                "university", "hospital", "cinema", "marketplace", "bus_station", "mall",
                "police", "fire_station", "fuel", "restaurant", "pharmacy", "bank",
            ]),
            ("tourism", &["attraction", "hotel", "museum", "theme_park"]),
            ("shop", &["mall", "supermarket", "electronics"]),
            ("historic", &["monument", "memorial"]),
            ("building", &["train_station"]),
            ("highway", &["motorway", "trunk", "primary"]),
        ];
        TagFilters(
            table
                .iter()
                .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
                .collect(),
        )
    }
}

// ── ExportConfig ──────────────────────────────────────────────────────────────

/// Top-level export configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Provider region: path to the raw network source.
    pub area: PathBuf,

    /// Explicit provider; `None` infers it from the `area` extension.
    pub provider: Option<ProviderKind>,

    /// Edge classes fetched from the provider.
    pub network_type: NetworkType,

    /// Landmark feature filters.
    pub tags: TagFilters,

    /// Directory the three output files are written to.
    pub output_dir: PathBuf,

    /// File name prefix: `<prefix>_locations.txt` and so on.
    pub prefix: String,

    /// Worker thread count for the batch nearest-node queries.  `None` uses
    /// all logical cores.
    pub threads: Option<usize>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            area:         PathBuf::new(),
            provider:     None,
            network_type: NetworkType::default(),
            tags:         TagFilters::default(),
            output_dir:   PathBuf::from("."),
            prefix:       "network".to_owned(),
            threads:      None,
        }
    }
}

impl ExportConfig {
    /// Read a JSON configuration file.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> CoreResult<Self> {
        serde_json::from_str(text).map_err(|e| CoreError::Parse(e.to_string()))
    }

    /// The provider to use: the explicit one, or one inferred from `area`.
    pub fn provider_kind(&self) -> CoreResult<ProviderKind> {
        self.provider.or_else(|| ProviderKind::infer(&self.area)).ok_or_else(|| {
            CoreError::Config(format!(
                "cannot infer provider from area {:?}; set \"provider\" explicitly",
                self.area
            ))
        })
    }

    /// Reject configurations that would fail late or produce unusable files.
    pub fn validate(&self) -> CoreResult<()> {
        if self.area.as_os_str().is_empty() {
            return Err(CoreError::Config("\"area\" is required".into()));
        }
        if self.prefix.is_empty()
            || self.prefix.chars().any(|c| c.is_whitespace() || c == '/' || c == '\\')
        {
            return Err(CoreError::Config(format!(
                "invalid prefix {:?}: must be non-empty with no whitespace or path separators",
                self.prefix
            )));
        }
        if self.threads == Some(0) {
            return Err(CoreError::Config("\"threads\" must be at least 1".into()));
        }
        self.provider_kind()?;
        Ok(())
    }
}
