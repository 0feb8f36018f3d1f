use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the `campusnav` front end
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] campusnav_core::Error),

    #[error(
        "data file not found: {}. Run `campusnav generate` to create the sample campus",
        .0.display()
    )]
    MissingData(PathBuf),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
