//! Unified error types for the cctv-setup toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while generating the CCTV kit.
#[derive(Error, Debug)]
pub enum CctvSetupError {
    // --- Filesystem ---

    /// Creating the output directory, writing a file, or changing its mode failed.
    #[error("filesystem error at {path}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Configuration ---

    /// The JSON configuration file could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration could not be serialized for writing.
    #[error("failed to serialize config for {path}")]
    ConfigSerialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Templates ---

    /// Handlebars rendering failed (malformed skeleton or missing variable).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),
}

impl CctvSetupError {
    /// Wrap an I/O error with the path it happened on.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// The path this error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Filesystem { path, .. }
            | Self::ConfigNotFound { path, .. }
            | Self::ConfigParse { path, .. }
            | Self::ConfigSerialize { path, .. } => Some(path),
            Self::TemplateRender(_) => None,
        }
    }
}

/// Alias for `Result<T, CctvSetupError>`.
pub type Result<T> = std::result::Result<T, CctvSetupError>;
