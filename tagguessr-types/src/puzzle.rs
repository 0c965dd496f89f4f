use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Normalized tag name: lowercase, spaces replaced by underscores
pub type Tag = String;

/// Calendar-day identifier in `YYYY-MM-DD` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct DateKey(String);

impl DateKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredTag {
    pub tag: Tag,
    pub points: i32,
}

/// One day's image and its scored tags. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Puzzle {
    pub date_key: DateKey,
    pub image_url: String,
    pub tags: Vec<ScoredTag>,
}

impl Puzzle {
    /// Find a tag by case-insensitive exact name
    pub fn find_tag(&self, name: &str) -> Option<&ScoredTag> {
        let name = name.to_lowercase();
        self.tags.iter().find(|t| t.tag.to_lowercase() == name)
    }

    pub fn total_points(&self) -> i32 {
        self.tags.iter().map(|t| t.points).sum()
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}

/// Popularity of a tag in the tagging service. Only lives for one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPopularity {
    pub tag: Tag,
    pub count: u64,
}
