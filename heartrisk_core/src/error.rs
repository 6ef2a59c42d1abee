//! Error types for the heartrisk_core library.

use std::io;
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for heartrisk_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// An artifact file is absent at startup
    #[error("{kind} file not found. Please check the path: {}", path.display())]
    MissingArtifact { kind: &'static str, path: PathBuf },

    /// An artifact file exists but its contents are unusable
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Form input outside a field's domain
    #[error("Input error: {0}")]
    Input(String),

    /// Prediction failed (missing artifacts, non-finite standardization, ...)
    #[error("Prediction error: {0}")]
    Prediction(String),
}
