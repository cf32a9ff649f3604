// File: crates/chart-core/src/error.rs
// Summary: Error type for the fallible parts of the core API (parsing inputs and config).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown bucket mode '{0}' (expected hourly, daily or monthly)")]
    UnknownBucketMode(String),

    #[error("invalid color '{0}' (expected #rrggbb or #aarrggbb)")]
    InvalidColor(String),

    #[error("failed to parse series JSON: {0}")]
    SeriesJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
