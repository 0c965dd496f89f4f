use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

use tagguessr_types::{DateKey, Puzzle, PuzzleError, Tag, TagPopularity};

use crate::{
    extract_tags, PostSource, RarityScorer, TagFrequencyClient, DEFAULT_TOTAL_POINTS,
    FALLBACK_COUNT,
};

/// Builds a fresh puzzle from a random post
pub struct PuzzleGenerator {
    posts: Arc<dyn PostSource>,
    counts: Arc<dyn TagFrequencyClient>,
    total_points: i32,
}

impl PuzzleGenerator {
    pub fn new(posts: Arc<dyn PostSource>, counts: Arc<dyn TagFrequencyClient>) -> Self {
        Self {
            posts,
            counts,
            total_points: DEFAULT_TOTAL_POINTS,
        }
    }

    pub fn with_total_points(mut self, total_points: i32) -> Self {
        self.total_points = total_points;
        self
    }

    /// Generate the puzzle for `date_key`.
    ///
    /// Only the post fetch can fail. Individual popularity lookups that fail fall
    /// back to a count of 1, so a single bad lookup never blocks generation.
    pub async fn generate(&self, date_key: &DateKey) -> Result<Puzzle, PuzzleError> {
        let post = self.posts.random_post().await.map_err(|e| match e {
            PuzzleError::SourceUnavailable { .. } => e,
            other => PuzzleError::source_unavailable(other.to_string()),
        })?;

        if post.image_url.is_empty() {
            return Err(PuzzleError::source_unavailable("post has no image url"));
        }

        let tags = extract_tags(&post);
        if tags.is_empty() {
            return Err(PuzzleError::source_unavailable("post has no tags"));
        }

        debug!("Looking up popularity for {} tags", tags.len());
        let popularities = self.lookup_popularities(tags).await;
        let scored = RarityScorer::score(&popularities, self.total_points);

        info!(
            "Generated puzzle for {} with {} tags ({} points)",
            date_key,
            scored.len(),
            scored.iter().map(|t| t.points).sum::<i32>()
        );

        Ok(Puzzle {
            date_key: date_key.clone(),
            image_url: post.image_url,
            tags: scored,
        })
    }

    /// Issue every lookup at once and wait for all of them
    async fn lookup_popularities(&self, tags: Vec<Tag>) -> Vec<TagPopularity> {
        let lookups = tags.into_iter().map(|tag| async move {
            let count = match self.counts.lookup_count(&tag).await {
                Ok(count) => count.max(FALLBACK_COUNT),
                Err(e) => {
                    warn!("{}; using fallback count {}", e, FALLBACK_COUNT);
                    FALLBACK_COUNT
                }
            };
            TagPopularity { tag, count }
        });

        join_all(lookups).await
    }
}
