use percent_encoding::percent_decode_str;
use regex::Regex;
use serde::Deserialize;
use std::sync::{Arc, LazyLock};
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};

use tagguessr_client::{top_suggestions, TagDirectory};

use crate::error::ProxyError;

static UNSAFE_SEARCH_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_]").expect("valid search sanitizer pattern"));

#[derive(Debug, Deserialize)]
pub struct AutofillQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteQuery {
    pub query: Option<String>,
}

/// Exact-name lookup, forwarded verbatim
pub async fn handle_tag_lookup(
    name: String,
    directory: Arc<dyn TagDirectory>,
) -> Result<WithStatus<Json>, warp::Rejection> {
    let tag_name = decode_path_segment(&name).replace(' ', "_");

    match directory.tags_by_name(&tag_name).await {
        Ok(records) => Ok(warp::reply::with_status(
            warp::reply::json(&records),
            StatusCode::OK,
        )),
        Err(err) => {
            tracing::warn!("Tag lookup for '{}' failed: {}", tag_name, err);
            Ok(ProxyError::Upstream("Failed to fetch tag info").to_reply())
        }
    }
}

/// Substring search reduced to the most popular suggestions
pub async fn handle_autofill(
    query: AutofillQuery,
    directory: Arc<dyn TagDirectory>,
    limit: usize,
) -> Result<WithStatus<Json>, warp::Rejection> {
    let Some(search) = query.q.filter(|q| !q.is_empty()) else {
        return Ok(ProxyError::BadRequest("Missing search term").to_reply());
    };

    let sanitized = sanitize_search(&search);
    match directory.tags_matching(&sanitized, None).await {
        Ok(records) => Ok(warp::reply::with_status(
            warp::reply::json(&top_suggestions(records, limit)),
            StatusCode::OK,
        )),
        Err(err) => {
            tracing::warn!("Autofill search for '{}' failed: {}", sanitized, err);
            Ok(ProxyError::Upstream("Failed to fetch autofill suggestions").to_reply())
        }
    }
}

/// Substring search, raw records capped by the upstream limit
pub async fn handle_tag_autocomplete(
    query: AutocompleteQuery,
    directory: Arc<dyn TagDirectory>,
    limit: u32,
) -> Result<WithStatus<Json>, warp::Rejection> {
    let Some(search) = query.query.filter(|q| !q.is_empty()) else {
        return Ok(ProxyError::BadRequest("Missing query").to_reply());
    };

    match directory.tags_matching(&search, Some(limit)).await {
        Ok(records) => Ok(warp::reply::with_status(
            warp::reply::json(&records),
            StatusCode::OK,
        )),
        Err(err) => {
            tracing::error!("Autocomplete search for '{}' failed: {}", search, err);
            Ok(ProxyError::Upstream("Failed to fetch tags").to_reply())
        }
    }
}

/// Lowercase and strip everything outside `[a-z0-9_]`
pub fn sanitize_search(search: &str) -> String {
    UNSAFE_SEARCH_CHARS
        .replace_all(&search.to_lowercase(), "")
        .into_owned()
}

/// Undo percent-encoding in a raw path segment. Malformed escapes are kept as-is.
pub fn decode_path_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}
