//! Error types for the playlist store

use std::path::PathBuf;

/// Reasons an `add` request is rejected before touching the collection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("the video title is required")]
    EmptyTitle,

    #[error("the video link is required")]
    EmptyLink,

    #[error("not a recognized video link: {0}")]
    UnrecognizedLink(String),

    #[error("no identifiers left to assign")]
    IdsExhausted,
}

/// Failures reading or writing the snapshot file
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot I/O failed for {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot at {path:?} is not a valid playlist: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// Raised by the in-memory gateway when told to fail
    #[error("snapshot backend unavailable: {0}")]
    Unavailable(String),
}

impl SnapshotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
