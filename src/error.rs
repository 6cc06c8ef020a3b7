//! Error types shared across the crate

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem operation failed on a specific path.
    #[error("{action} '{path}': {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `scopemap.toml` exists but could not be parsed.
    #[error("invalid config '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// The external dependency analyzer could not produce a graph.
    #[error("{tool} failed: {reason}")]
    Analyzer { tool: &'static str, reason: String },
}

impl Error {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn analyzer(tool: &'static str, reason: impl Into<String>) -> Self {
        Error::Analyzer {
            tool,
            reason: reason.into(),
        }
    }
}
