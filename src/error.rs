use thiserror::Error;

#[derive(Error, Debug)]
pub enum MirrorGridError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    /// A shape whose half-path cannot be mirrored on the current grid.
    #[error("Shape '{shape}' is invalid: {reason}")]
    InvalidShape { shape: String, reason: String },

    /// `known` lists the names that were searched, comma separated.
    #[error("Unknown shape '{name}' in {origin} (known: {known})")]
    UnknownShape {
        name: String,
        origin: String,
        known: String,
    },

    /// Stroke or pointer input that cannot be scored.
    #[error("Drawing rejected: {0}")]
    Drawing(String),
}

impl MirrorGridError {
    pub fn invalid_shape(shape: &str, reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            shape: shape.to_string(),
            reason: reason.into(),
        }
    }
}

pub type MgResult<T> = Result<T, MirrorGridError>;
