use thiserror::Error;

/// Top-level error type for primesh.
#[derive(Debug, Error)]
pub enum PrimeshError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while validating a job before any generation work.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse job file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("region `{region}`: {field} = {value} must be finite and positive")]
    NonPositive {
        region: String,
        field: &'static str,
        value: f64,
    },

    #[error("region `{region}`: degenerate extent on {axis} axis (min {min} >= max {max})")]
    DegenerateExtent {
        region: String,
        axis: char,
        min: f64,
        max: f64,
    },

    #[error("region `{region}`: resolution on {axis} axis must be at least 1")]
    ZeroResolution { region: String, axis: char },

    #[error("region `{region}`: unsupported resolution: {reason}")]
    UnsupportedResolution { region: String, reason: String },

    #[error("region `{region}`: SPH regions require a density")]
    MissingDensity { region: String },

    #[error("region `{region}`: {field} must be at least 1")]
    ZeroId { region: String, field: &'static str },

    #[error("region `{region}`: {field} reaches {last}, wider than the {width}-column field")]
    IdOverflow {
        region: String,
        field: &'static str,
        last: u64,
        width: usize,
    },
}

/// Errors raised while addressing a structured grid.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("logical index {index:?} is outside grid extent {extent:?}")]
    IndexOutOfRange {
        index: [usize; 3],
        extent: [usize; 3],
    },
}

/// Errors raised while laying out fixed-width records.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("value `{value}` in {section} does not fit a {width}-column field")]
    FieldOverflow {
        section: &'static str,
        value: String,
        width: usize,
    },

    #[error("non-finite value {value} in {section}")]
    NonFinite { section: &'static str, value: f64 },
}

/// Convenience type alias for results using [`PrimeshError`].
pub type Result<T> = std::result::Result<T, PrimeshError>;
