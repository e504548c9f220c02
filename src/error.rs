use std::path::PathBuf;
use thiserror::Error;

/// Reasons a region profile is refused at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read region config at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid region config JSON")]
    Parse(#[from] serde_json::Error),

    #[error("area_range min ({min}) is greater than max ({max})")]
    InvertedAreaRange { min: f64, max: f64 },

    #[error("intensity_labels must name at least one intensity")]
    NoIntensities,

    #[error("jitter_range must be non-negative, got {0}")]
    NegativeJitter(f64),

    #[error("cost_per_km2 must be non-negative, got {0}")]
    NegativeCost(f64),

    #[error("{0} must be a finite number")]
    NotFinite(&'static str),

    #[error("{0} spans a width too large to sample")]
    RangeTooWide(&'static str),

    #[error("bounds are inverted on the {0} axis")]
    InvertedBounds(&'static str),
}
