use std::sync::Arc;
use tracing::{debug, info, warn};

use tagguessr_types::{DateKey, Puzzle, PuzzleError, ScoredTag};

use crate::{GameConfig, KeyValueStore, PuzzleGenerator};

/// One puzzle per calendar day, persisted as two entries:
/// `<tag prefix>-<date>` holds the scored tags as JSON and
/// `<image prefix>-<date>` holds the raw image URL.
pub struct PuzzleCache {
    store: Arc<dyn KeyValueStore>,
    generator: PuzzleGenerator,
    tag_prefix: String,
    image_prefix: String,
}

impl PuzzleCache {
    /// The generator's point pool is set from `config.total_points`
    pub fn new(store: Arc<dyn KeyValueStore>, generator: PuzzleGenerator, config: &GameConfig) -> Self {
        Self {
            store,
            generator: generator.with_total_points(config.total_points),
            tag_prefix: config.tag_cache_prefix.clone(),
            image_prefix: config.image_cache_prefix.clone(),
        }
    }

    pub fn tags_key(&self, date_key: &DateKey) -> String {
        format!("{}-{}", self.tag_prefix, date_key)
    }

    pub fn image_key(&self, date_key: &DateKey) -> String {
        format!("{}-{}", self.image_prefix, date_key)
    }

    /// Return the stored puzzle for `date_key`, generating and storing one on a miss
    pub async fn get_or_create(&self, date_key: &DateKey) -> Result<Puzzle, PuzzleError> {
        if let Some(puzzle) = self.load(date_key).await? {
            debug!("Puzzle cache hit for {}", date_key);
            return Ok(puzzle);
        }

        info!("No cached puzzle for {}, generating", date_key);
        let puzzle = self.generator.generate(date_key).await?;

        if let Err(e) = self.save(&puzzle).await {
            // The puzzle is still playable; the next load will regenerate
            warn!("Failed to cache puzzle for {}: {}", date_key, e);
        }

        Ok(puzzle)
    }

    /// Read a stored puzzle without generating. Corrupt entries count as a miss.
    pub async fn load(&self, date_key: &DateKey) -> Result<Option<Puzzle>, PuzzleError> {
        let tags_key = self.tags_key(date_key);
        let Some(raw_tags) = self.store.get(&tags_key).await? else {
            return Ok(None);
        };
        let Some(image_url) = self.store.get(&self.image_key(date_key)).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<Vec<ScoredTag>>(&raw_tags) {
            Ok(tags) => Ok(Some(Puzzle {
                date_key: date_key.clone(),
                image_url,
                tags,
            })),
            Err(e) => {
                let corrupt = PuzzleError::CacheCorrupt {
                    key: tags_key,
                    reason: e.to_string(),
                };
                warn!("{}; regenerating", corrupt);
                Ok(None)
            }
        }
    }

    pub async fn save(&self, puzzle: &Puzzle) -> Result<(), PuzzleError> {
        let raw_tags = serde_json::to_string(&puzzle.tags)
            .map_err(|e| PuzzleError::storage(e.to_string()))?;

        self.store
            .set(&self.tags_key(&puzzle.date_key), &raw_tags)
            .await?;
        self.store
            .set(&self.image_key(&puzzle.date_key), &puzzle.image_url)
            .await?;
        Ok(())
    }
}
