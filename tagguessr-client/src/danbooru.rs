use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use tagguessr_core::{PostFilter, PostSource, TagFrequencyClient};
use tagguessr_types::{PuzzleError, SourcePost};

use crate::{popularity_from_records, ClientError, PostRecord, TagRecord};

pub const DEFAULT_DANBOORU_URL: &str = "https://danbooru.donmai.us";

/// Read-only tag queries the proxy forwards to the tagging service
#[async_trait]
pub trait TagDirectory: Send + Sync {
    /// Exact-name search
    async fn tags_by_name(&self, name: &str) -> Result<Vec<TagRecord>, ClientError>;

    /// Substring search (`*fragment*`), optionally capped by the service
    async fn tags_matching(
        &self,
        fragment: &str,
        limit: Option<u32>,
    ) -> Result<Vec<TagRecord>, ClientError>;
}

/// Client for the upstream tagging service
#[derive(Debug, Clone)]
pub struct DanbooruClient {
    client: Client,
    base_url: String,
    post_filter: PostFilter,
}

impl DanbooruClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            post_filter: PostFilter::default(),
        }
    }

    pub fn with_post_filter(mut self, post_filter: PostFilter) -> Self {
        self.post_filter = post_filter;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One random post matching the configured filter
    pub async fn fetch_random_post(&self) -> Result<PostRecord, ClientError> {
        let query = self.post_filter.to_query();
        tracing::debug!("Requesting random post with tags '{}'", query);

        let posts: Vec<PostRecord> = self
            .get_json(
                "/posts.json",
                &[
                    ("limit", "1".to_string()),
                    ("random", "true".to_string()),
                    ("tags", query),
                ],
            )
            .await?;

        posts.into_iter().next().ok_or(ClientError::Empty)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;

        if !response.status().is_success() {
            tracing::warn!("{} returned status {}", url, response.status());
            return Err(ClientError::Status {
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl TagDirectory for DanbooruClient {
    async fn tags_by_name(&self, name: &str) -> Result<Vec<TagRecord>, ClientError> {
        self.get_json("/tags.json", &[("search[name]", name.to_string())])
            .await
    }

    async fn tags_matching(
        &self,
        fragment: &str,
        limit: Option<u32>,
    ) -> Result<Vec<TagRecord>, ClientError> {
        let mut query = vec![("search[name_matches]", format!("*{}*", fragment))];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        self.get_json("/tags.json", &query).await
    }
}

#[async_trait]
impl PostSource for DanbooruClient {
    async fn random_post(&self) -> Result<SourcePost, PuzzleError> {
        self.fetch_random_post()
            .await
            .map(SourcePost::from)
            .map_err(ClientError::into_source_unavailable)
    }
}

#[async_trait]
impl TagFrequencyClient for DanbooruClient {
    async fn lookup_count(&self, tag: &str) -> Result<u64, PuzzleError> {
        let records = self
            .tags_by_name(tag)
            .await
            .map_err(|e| e.into_lookup_failed(tag))?;
        Ok(popularity_from_records(tag, &records))
    }
}
