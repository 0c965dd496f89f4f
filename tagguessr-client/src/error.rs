use tagguessr_types::PuzzleError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status {status}")]
    Status { status: reqwest::StatusCode },
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Empty response")]
    Empty,
}

impl ClientError {
    pub fn into_source_unavailable(self) -> PuzzleError {
        PuzzleError::source_unavailable(self.to_string())
    }

    pub fn into_lookup_failed(self, tag: &str) -> PuzzleError {
        PuzzleError::lookup_failed(tag, self.to_string())
    }
}
