use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A randomly selected post from the tagging service, reduced to what a puzzle needs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourcePost {
    pub image_url: String,
    pub tag_string_general: String,
    pub tag_string_character: String,
    pub tag_string_artist: String,
    pub tag_string_copyright: String,
}

impl SourcePost {
    /// The four tag groups in extraction order
    pub fn tag_groups(&self) -> [&str; 4] {
        [
            &self.tag_string_general,
            &self.tag_string_character,
            &self.tag_string_artist,
            &self.tag_string_copyright,
        ]
    }
}

/// Autofill suggestion shown under the guess field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TagSuggestion {
    pub name: String,
    pub post_count: i64,
    pub category: i32,
}
