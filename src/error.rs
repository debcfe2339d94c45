//! Error types for the linkback annotation plugin.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Bitbucket project is not configured: set `project` to \"username/projectname\" \
         in linkback.toml or the host configuration"
    )]
    ProjectNotSet,

    #[error("Invalid skip pattern {pattern:?}: {message}")]
    InvalidSkipPattern { pattern: String, message: String },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Failed to parse configuration file {path:?}: {message}")]
    ParseError { path: std::path::PathBuf, message: String },

    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Configuration I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// Top-level plugin errors
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Malformed build request: {0}")]
    MalformedRequest(serde_json::Error),

    #[error("Failed to encode response: {0}")]
    EncodeResponse(serde_json::Error),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
