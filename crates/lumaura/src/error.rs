//! # Host Error Types

use std::path::PathBuf;

use lumaura_core::VizError;
use lumaura_effects::EffectsError;
use thiserror::Error;

/// Errors raised while mounting or driving components.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StageError {
    /// Component options were rejected.
    #[error(transparent)]
    Effects(#[from] EffectsError),

    /// Lifecycle violation.
    #[error(transparent)]
    Viz(#[from] VizError),
}

/// Result type for stage operations.
pub type StageResult<T> = Result<T, StageError>;

/// Errors raised while loading a scene file.
#[derive(Error, Debug)]
pub enum SceneError {
    /// The file could not be read.
    #[error("cannot read scene file {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The TOML is malformed or has wrongly typed values.
    #[error("invalid scene: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two mounts share a selector.
    #[error("duplicate mount selector: {0}")]
    DuplicateMount(String),

    /// Mounting failed.
    #[error(transparent)]
    Stage(#[from] StageError),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors raised while talking to the portal backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The request never produced a response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend answered with an error status.
    #[error("backend rejected request: {0}")]
    Rejected(String),
}

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;
