use async_trait::async_trait;
use tagguessr_types::{PuzzleError, SourcePost};

/// Supplies one random qualifying post per call
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fails with `PuzzleError::SourceUnavailable` when the service errors or has no candidate
    async fn random_post(&self) -> Result<SourcePost, PuzzleError>;
}

/// Resolves a tag name to its popularity count
#[async_trait]
pub trait TagFrequencyClient: Send + Sync {
    /// Returns a positive count. Unknown tags and a count of zero resolve to 1.
    /// Network or service failures are reported as `PuzzleError::LookupFailed`.
    async fn lookup_count(&self, tag: &str) -> Result<u64, PuzzleError>;
}
