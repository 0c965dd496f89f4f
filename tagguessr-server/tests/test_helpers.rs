#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Map;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tagguessr_client::{ClientError, TagDirectory, TagRecord};
use tagguessr_server::config::Config;
use tagguessr_server::rate_limiter::ClientRateLimiter;

pub fn create_tag_record(name: &str, post_count: i64, category: i32) -> TagRecord {
    TagRecord {
        name: name.to_string(),
        post_count,
        category,
        extra: Map::new(),
    }
}

/// In-memory stand-in for the upstream tagging service
pub struct FakeDirectory {
    records: Vec<TagRecord>,
    failing: bool,
    pub calls: Mutex<Vec<(String, Option<u32>)>>,
}

impl FakeDirectory {
    pub fn new(records: Vec<TagRecord>) -> Self {
        Self {
            records,
            failing: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn recorded_calls(&self) -> Vec<(String, Option<u32>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TagDirectory for FakeDirectory {
    async fn tags_by_name(&self, name: &str) -> Result<Vec<TagRecord>, ClientError> {
        self.calls.lock().unwrap().push((name.to_string(), None));
        if self.failing {
            return Err(ClientError::Empty);
        }
        Ok(self.records.iter().filter(|r| r.name == name).cloned().collect())
    }

    async fn tags_matching(
        &self,
        fragment: &str,
        limit: Option<u32>,
    ) -> Result<Vec<TagRecord>, ClientError> {
        self.calls.lock().unwrap().push((fragment.to_string(), limit));
        if self.failing {
            return Err(ClientError::Empty);
        }
        let matching = self
            .records
            .iter()
            .filter(|r| r.name.contains(fragment))
            .cloned();
        Ok(match limit {
            Some(limit) => matching.take(limit as usize).collect(),
            None => matching.collect(),
        })
    }
}

pub fn create_test_config() -> Arc<Config> {
    Arc::new(Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        danbooru_base_url: "http://upstream.invalid".to_string(),
        rate_limit_burst: 30,
        rate_limit_refill_seconds: 2,
        autofill_limit: 10,
        autocomplete_limit: 10,
        idle_bucket_minutes: 10,
    })
}

pub fn create_test_limiter(burst: u32) -> Arc<ClientRateLimiter> {
    Arc::new(ClientRateLimiter::new(burst, Duration::from_secs(3600)))
}

/// Twelve "hair" tags with distinct counts plus a few unrelated ones
pub fn create_hair_records() -> Vec<TagRecord> {
    let mut records: Vec<TagRecord> = (1..=12)
        .map(|i| create_tag_record(&format!("hair_{}", i), i * 100, 0))
        .collect();
    records.push(create_tag_record("long_hair", 2_000_000, 0));
    records.push(create_tag_record("1girl", 5_400_000, 0));
    records.push(create_tag_record("hatsune_miku", 150_000, 4));
    records
}
