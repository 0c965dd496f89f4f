use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum PuzzleError {
    /// Random image fetch failed or came back empty; no puzzle is produced
    #[error("Image source unavailable: {reason}")]
    SourceUnavailable { reason: String },
    /// One popularity lookup failed; callers recover with a count of 1
    #[error("Tag lookup failed for '{tag}': {reason}")]
    LookupFailed { tag: String, reason: String },
    /// A stored cache entry could not be parsed; treated as a miss
    #[error("Cache entry '{key}' is corrupt: {reason}")]
    CacheCorrupt { key: String, reason: String },
    #[error("Storage error: {reason}")]
    Storage { reason: String },
}

impl PuzzleError {
    pub fn source_unavailable(reason: impl Into<String>) -> Self {
        PuzzleError::SourceUnavailable { reason: reason.into() }
    }

    pub fn lookup_failed(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        PuzzleError::LookupFailed {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    pub fn storage(reason: impl Into<String>) -> Self {
        PuzzleError::Storage { reason: reason.into() }
    }
}
