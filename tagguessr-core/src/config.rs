pub const DEFAULT_TOTAL_POINTS: i32 = 1000;
pub const DEFAULT_HINT_PENALTY: i32 = 10;
pub const PERFECT_SCORE_THRESHOLD: i32 = 999;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub tag_cache_prefix: String,
    pub image_cache_prefix: String,
    pub total_points: i32,
    pub hint_penalty: i32,
    pub perfect_threshold: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tag_cache_prefix: "danbooru-daily-tags".to_string(),
            image_cache_prefix: "danbooru-daily-image".to_string(),
            total_points: DEFAULT_TOTAL_POINTS,
            hint_penalty: DEFAULT_HINT_PENALTY,
            perfect_threshold: PERFECT_SCORE_THRESHOLD,
        }
    }
}

/// Which posts qualify as a daily image
#[derive(Debug, Clone, PartialEq)]
pub struct PostFilter {
    pub exclude_video: bool,
    pub min_score: i32,
    pub rating: String,
}

impl Default for PostFilter {
    fn default() -> Self {
        Self {
            exclude_video: true,
            min_score: 10,
            rating: "g".to_string(),
        }
    }
}

impl PostFilter {
    /// Render as a tag search query for the tagging service
    pub fn to_query(&self) -> String {
        let mut terms = Vec::new();
        if self.exclude_video {
            terms.push("-filetype:video".to_string());
        }
        terms.push(format!("score:>{}", self.min_score));
        if !self.rating.is_empty() {
            terms.push(format!("rating:{}", self.rating));
        }
        terms.join(" ")
    }
}
