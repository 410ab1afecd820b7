use std::path::PathBuf;
use thiserror::Error;

/// All errors generated in `sliding-average`.
#[derive(Debug, Error)]
pub enum AverageError {
    #[error("window size must be a positive integer, got {window}")]
    InvalidWindow { window: i64 },

    #[error("failed to read config file {path:?}: {error}")]
    ConfigIo {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}
