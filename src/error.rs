use std::path::PathBuf;
use thiserror::Error;

/// Umbrella error for embedders that funnel every subsystem through one type.
#[derive(Error, Debug)]
pub enum LensviewError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("No statuses configured")]
    NoStatuses,
}

/// Produced by `JsonClient` implementors; the core never builds the
/// transport itself.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("GET {path} failed: {message}")]
    Request { path: String, message: String },

    #[error("Invalid JSON from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Malformed perspective payload: {0}")]
    Payload(#[from] serde_json::Error),
}
