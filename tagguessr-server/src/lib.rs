use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::Filter;

use tagguessr_client::TagDirectory;

use crate::config::Config;
use crate::error::ProxyError;
use crate::proxy::{AutocompleteQuery, AutofillQuery};
use crate::rate_limiter::ClientRateLimiter;

pub mod config;
pub mod error;
pub mod proxy;
pub mod rate_limiter;

pub fn create_routes(
    directory: Arc<dyn TagDirectory>,
    rate_limiter: Arc<ClientRateLimiter>,
    config: Arc<Config>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let directory_filter = warp::any().map({
        let directory = directory.clone();
        move || directory.clone()
    });

    let rate_limited = with_rate_limit(rate_limiter);
    let autofill_limit = config.autofill_limit;
    let autocomplete_limit = config.autocomplete_limit;

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", warp::http::StatusCode::OK));

    // Exact tag lookup
    let tag = warp::path!("api" / "tag" / String)
        .and(warp::get())
        .and(rate_limited.clone())
        .and(directory_filter.clone())
        .and_then(proxy::handle_tag_lookup);

    // Autofill suggestions
    let autofill = warp::path!("api" / "autofill")
        .and(warp::get())
        .and(rate_limited.clone())
        .and(warp::query::<AutofillQuery>())
        .and(directory_filter.clone())
        .and(warp::any().map(move || autofill_limit))
        .and_then(proxy::handle_autofill);

    // Raw substring search
    let tag_autocomplete = warp::path!("api" / "tag-autocomplete")
        .and(warp::get())
        .and(rate_limited)
        .and(warp::query::<AutocompleteQuery>())
        .and(directory_filter)
        .and(warp::any().map(move || autocomplete_limit))
        .and_then(proxy::handle_tag_autocomplete);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET"]);

    health
        .or(tag)
        .or(autofill)
        .or(tag_autocomplete)
        .recover(handle_rejection)
        .with(cors)
        .with(warp::log("tagguessr"))
}

/// Reject with `ProxyError::RateLimited` once the caller's bucket is empty
fn with_rate_limit(
    rate_limiter: Arc<ClientRateLimiter>,
) -> impl Filter<Extract = (), Error = warp::Rejection> + Clone {
    warp::addr::remote()
        .and(warp::any().map(move || rate_limiter.clone()))
        .and_then(
            |addr: Option<SocketAddr>, rate_limiter: Arc<ClientRateLimiter>| async move {
                if rate_limiter.check(addr.map(|a| a.ip())) {
                    Ok(())
                } else {
                    tracing::debug!("Rate limit exceeded for {:?}", addr);
                    Err(warp::reject::custom(ProxyError::RateLimited))
                }
            },
        )
        .untuple_one()
}

async fn handle_rejection(err: warp::Rejection) -> Result<impl warp::Reply, Infallible> {
    let reply = if let Some(proxy_error) = err.find::<ProxyError>() {
        proxy_error.to_reply()
    } else if err.find::<warp::reject::InvalidQuery>().is_some() {
        ProxyError::BadRequest("Invalid query").to_reply()
    } else {
        ProxyError::NotFound.to_reply()
    };

    Ok(reply)
}
