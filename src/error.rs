// Error types for dataset validation and rendering

use thiserror::Error;

/// Errors surfaced by the renderers and the raster backend
#[derive(Debug, Error)]
pub enum ChartError {
    /// Input data is malformed (bad year, bad date, duplicate day, intensity out of range)
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    /// A font file could not be parsed
    #[error("failed to load font: {0}")]
    Font(String),

    /// A command line or `CONTRIB_*` value could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
