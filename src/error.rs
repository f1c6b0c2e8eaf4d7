use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error("KDL parse error: {0}")]
    KdlError(#[from] kdl::KdlError),

    #[error("Config file not found at: {path}")]
    ConfigNotFound { path: PathBuf },

    /// The process ran but exited with a status the command does not accept
    #[error("Command '{command}' exited with status {status}")]
    CommandFailed { command: String, status: i32 },

    #[error("System command '{command}' could not be started: {reason}")]
    SpawnFailed { command: String, reason: String },

    /// Backend has no such step (e.g. pip has no index to refresh)
    #[error("{backend} does not support {operation}")]
    Unsupported {
        backend: String,
        operation: &'static str,
    },

    #[error("{backend} upgrade incomplete, failed: {}", failed.join(", "))]
    UpgradeIncomplete { backend: String, failed: Vec<String> },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, UpdateError>;
