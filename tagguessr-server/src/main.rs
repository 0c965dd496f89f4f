use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tagguessr_client::DanbooruClient;
use tagguessr_server::{config::Config, create_routes, rate_limiter::ClientRateLimiter};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting TagGuessr tag proxy...");

    let config = Arc::new(Config::new());
    info!("Forwarding tag queries to {}", config.danbooru_base_url);

    let directory = Arc::new(DanbooruClient::new(config.danbooru_base_url.clone()));
    let rate_limiter = Arc::new(ClientRateLimiter::new(
        config.rate_limit_burst,
        Duration::from_secs(config.rate_limit_refill_seconds),
    ));

    let routes = create_routes(directory, rate_limiter.clone(), config.clone());

    // Forget clients that have gone quiet
    let idle_timeout = Duration::from_secs(config.idle_bucket_minutes * 60);
    let cleanup_rate_limiter = rate_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            let pruned = cleanup_rate_limiter.prune_idle(idle_timeout);
            if pruned > 0 {
                tracing::debug!("Pruned {} idle rate limit buckets", pruned);
            }
        }
    });

    let ip = match config.host.parse::<std::net::IpAddr>() {
        Ok(ip) => ip,
        Err(e) => {
            tracing::error!("Invalid HOST '{}': {}", config.host, e);
            std::process::exit(1);
        }
    };

    let (addr, server) =
        warp::serve(routes).bind_with_graceful_shutdown((ip, config.port), async {
            // Wait for SIGINT (Ctrl+C) or SIGTERM
            #[cfg(unix)]
            {
                let mut sigint =
                    signal::unix::signal(signal::unix::SignalKind::interrupt()).unwrap();
                let mut sigterm =
                    signal::unix::signal(signal::unix::SignalKind::terminate()).unwrap();

                tokio::select! {
                    _ = sigint.recv() => {
                        info!("Received SIGINT, shutting down gracefully...");
                    }
                    _ = sigterm.recv() => {
                        info!("Received SIGTERM, shutting down gracefully...");
                    }
                }
            }

            #[cfg(not(unix))]
            {
                signal::ctrl_c().await.expect("Failed to listen for ctrl+c");
                info!("Received Ctrl+C, shutting down gracefully...");
            }
        });

    info!("Proxy running at http://{}. Press Ctrl+C to stop.", addr);
    server.await;
    info!("Server shutdown complete.");
}
