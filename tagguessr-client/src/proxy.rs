use async_trait::async_trait;
use reqwest::{Client, Url};

use tagguessr_core::TagFrequencyClient;
use tagguessr_types::{PuzzleError, TagSuggestion};

use crate::{popularity_from_records, ClientError, TagRecord};

pub const DEFAULT_PROXY_URL: &str = "http://localhost:3001";

/// Engine-side client of the tag proxy
#[derive(Debug, Clone)]
pub struct ProxyClient {
    client: Client,
    base_url: Url,
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    /// Raw exact-name records for `tag`
    pub async fn tag_records(&self, tag: &str) -> Result<Vec<TagRecord>, ClientError> {
        let url = self.endpoint(&["api", "tag", tag])?;
        self.get_json(url).await
    }

    /// Autofill suggestions, most popular first
    pub async fn search(&self, query: &str) -> Result<Vec<TagSuggestion>, ClientError> {
        let mut url = self.endpoint(&["api", "autofill"])?;
        url.query_pairs_mut().append_pair("q", query);
        self.get_json(url).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status {
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl TagFrequencyClient for ProxyClient {
    async fn lookup_count(&self, tag: &str) -> Result<u64, PuzzleError> {
        let records = self
            .tag_records(tag)
            .await
            .map_err(|e| e.into_lookup_failed(tag))?;
        tracing::debug!("Proxy returned {} records for '{}'", records.len(), tag);
        Ok(popularity_from_records(tag, &records))
    }
}
