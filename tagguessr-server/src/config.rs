use std::env;

use tagguessr_client::DEFAULT_DANBOORU_URL;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub danbooru_base_url: String,
    pub rate_limit_burst: u32,
    pub rate_limit_refill_seconds: u64,
    pub autofill_limit: usize,
    pub autocomplete_limit: u32,
    pub idle_bucket_minutes: u64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .expect("Invalid PORT"),
            danbooru_base_url: env::var("DANBOORU_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_DANBOORU_URL.to_string()),
            rate_limit_burst: env::var("RATE_LIMIT_BURST")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("Invalid RATE_LIMIT_BURST"),
            rate_limit_refill_seconds: env::var("RATE_LIMIT_REFILL_SECONDS")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .expect("Invalid RATE_LIMIT_REFILL_SECONDS"),
            autofill_limit: env::var("AUTOFILL_LIMIT")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("Invalid AUTOFILL_LIMIT"),
            autocomplete_limit: env::var("AUTOCOMPLETE_LIMIT")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("Invalid AUTOCOMPLETE_LIMIT"),
            idle_bucket_minutes: env::var("IDLE_BUCKET_MINUTES")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("Invalid IDLE_BUCKET_MINUTES"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
