use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use tagguessr_types::PuzzleError;

/// String key-value storage local to one device
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, PuzzleError>;

    /// Insert or overwrite
    async fn set(&self, key: &str, value: &str) -> Result<(), PuzzleError>;

    async fn remove(&self, key: &str) -> Result<(), PuzzleError>;

    async fn has(&self, key: &str) -> Result<bool, PuzzleError> {
        Ok(self.get(key).await?.is_some())
    }
}

/// In-process store; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PuzzleError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PuzzleError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PuzzleError> {
        self.entries.remove(key);
        Ok(())
    }
}
