use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Node not found: {0}")]
    NodeNotFound(String),
    #[error("No path found from {start} to {end}")]
    NoPathFound { start: String, end: String },
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("Render error: {0}")]
    RenderError(String),
}

impl Error {
    /// Whether the caller can recover by asking for different endpoints
    pub fn is_query_error(&self) -> bool {
        matches!(self, Error::NodeNotFound(_) | Error::NoPathFound { .. })
    }
}
