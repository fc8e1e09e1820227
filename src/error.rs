use thiserror::Error;

/// Top-level error type for the polyclip crate.
#[derive(Debug, Error)]
pub enum PolyclipError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Clip(#[from] ClipError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// Errors related to contour structure.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors reported by the polygon clipping pipeline.
#[derive(Debug, Error)]
pub enum ClipError {
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("inconsistent entry/exit classification: {0}")]
    ClassificationInconsistency(String),

    #[error("result has a hole: clip polygon lies strictly inside the subject")]
    HoleInResult,
}

/// Convenience type alias for results using [`PolyclipError`].
pub type Result<T> = std::result::Result<T, PolyclipError>;
