//! Error types for the fallible edges of the canvas core.
//!
//! Interactive input handling never fails. Errors only come from
//! reconstructing nodes out of external records, persistence and media
//! probing.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvasError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record carried a depth outside the known stacking layers
    #[error("Invalid depth: {0} (expected 0..=4)")]
    InvalidDepth(i64),

    /// Record carried a content type this canvas cannot display
    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    /// Media file could not be probed for its dimensions
    #[error("Failed to probe media {path}: {source}")]
    Media {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Atomic layout write could not be committed
    #[error("Failed to persist layout: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Result type alias for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;
