use serde_json::json;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("{0}")]
    Upstream(&'static str),
    #[error("Rate limit exceeded")]
    RateLimited,
    #[error("Not found")]
    NotFound,
}

impl warp::reject::Reject for ProxyError {}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ProxyError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// `{"error": "..."}` with the matching status code
    pub fn to_reply(&self) -> WithStatus<Json> {
        warp::reply::with_status(
            warp::reply::json(&json!({ "error": self.to_string() })),
            self.status(),
        )
    }
}
