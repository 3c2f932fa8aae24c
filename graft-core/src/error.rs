use std::io;
use thiserror::Error;

/// The single fatal condition in metadata normalization.
///
/// Every other gap in probe output degrades to a sentinel or default
/// value; without a usable video stream there is nothing to describe,
/// so no partial descriptor is produced.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationError {
    #[error("probe output contains no video stream")]
    NoVideoStream,

    #[error("video stream width/height missing or invalid ({width}x{height})")]
    InvalidGeometry { width: i64, height: i64 },
}

/// Custom error types for graft
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("failed to start {0}: {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("{0} exited with an error: {1}")]
    CommandFailed(String, String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error(transparent)]
    Normalization(#[from] NormalizationError),

    #[error("project schema v{found} is newer than this build supports (v{supported})")]
    SchemaTooNew { found: u32, supported: u32 },
}

/// Result type for graft-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
