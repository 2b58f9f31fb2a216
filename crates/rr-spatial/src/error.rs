//! Spatial-stage error type.

use thiserror::Error;

use rr_core::FeatureId;

/// Why a geometry has no representative point.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum GeometryDefect {
    #[error("geometry has no coordinates")]
    Empty,

    #[error("centroid is undefined")]
    NoCentroid,

    #[error("geometry has a non-finite coordinate")]
    NonFinite,
}

/// Errors produced by `rr-spatial`.
#[derive(Debug, Error, PartialEq)]
pub enum SpatialError {
    /// No node has a usable coordinate, so there is nothing to resolve
    /// against.  Fatal for the resolver stage.
    #[error("cannot build a spatial index over zero nodes")]
    EmptyIndex,

    #[error("node count {0} exceeds the NormalizedId range")]
    TooManyNodes(usize),

    #[error("feature count {0} exceeds the FeatureId range")]
    TooManyFeatures(usize),

    /// A feature's geometry yields no representative point.  Recovered by
    /// skipping the feature.
    #[error("feature {feature} ({kind}): {defect}")]
    MalformedGeometry {
        feature: FeatureId,
        kind:    &'static str,
        defect:  GeometryDefect,
    },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
