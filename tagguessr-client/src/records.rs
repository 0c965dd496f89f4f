use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use tagguessr_core::FALLBACK_COUNT;
use tagguessr_types::{SourcePost, TagSuggestion};

/// Tag record as returned by the tagging service.
/// Fields the game does not use are kept in `extra` so records can be forwarded unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRecord {
    pub name: String,
    #[serde(default)]
    pub post_count: i64,
    #[serde(default)]
    pub category: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TagRecord {
    pub fn to_suggestion(&self) -> TagSuggestion {
        TagSuggestion {
            name: self.name.clone(),
            post_count: self.post_count,
            category: self.category,
        }
    }
}

/// Post record as returned by the tagging service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub large_file_url: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub tag_string_general: String,
    #[serde(default)]
    pub tag_string_character: String,
    #[serde(default)]
    pub tag_string_artist: String,
    #[serde(default)]
    pub tag_string_copyright: String,
}

impl From<PostRecord> for SourcePost {
    fn from(post: PostRecord) -> Self {
        SourcePost {
            image_url: post.large_file_url.or(post.file_url).unwrap_or_default(),
            tag_string_general: post.tag_string_general,
            tag_string_character: post.tag_string_character,
            tag_string_artist: post.tag_string_artist,
            tag_string_copyright: post.tag_string_copyright,
        }
    }
}

/// Popularity of `tag` from an exact-name search result.
/// No record, or a count of zero, means the tag is treated as maximally rare.
pub fn popularity_from_records(tag: &str, records: &[TagRecord]) -> u64 {
    let record = records
        .iter()
        .find(|r| r.name == tag)
        .or_else(|| records.first());

    match record {
        Some(r) if r.post_count > 0 => r.post_count as u64,
        _ => FALLBACK_COUNT,
    }
}

/// Autofill ordering: most popular first, at most `limit` entries
pub fn top_suggestions(mut records: Vec<TagRecord>, limit: usize) -> Vec<TagSuggestion> {
    records.sort_by(|a, b| b.post_count.cmp(&a.post_count));
    records
        .iter()
        .take(limit)
        .map(TagRecord::to_suggestion)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, post_count: i64) -> TagRecord {
        TagRecord {
            name: name.to_string(),
            post_count,
            category: 0,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_popularity_prefers_exact_name() {
        let records = vec![record("solo_focus", 90), record("solo", 5_000)];
        assert_eq!(popularity_from_records("solo", &records), 5_000);
    }

    #[test]
    fn test_popularity_fallbacks() {
        assert_eq!(popularity_from_records("nothing", &[]), 1);
        assert_eq!(popularity_from_records("dead_tag", &[record("dead_tag", 0)]), 1);
    }

    #[test]
    fn test_top_suggestions_sorted_and_truncated() {
        let records: Vec<_> = (0..15).map(|i| record(&format!("tag_{}", i), i * 10)).collect();
        let suggestions = top_suggestions(records, 10);

        assert_eq!(suggestions.len(), 10);
        assert_eq!(suggestions[0].name, "tag_14");
        assert_eq!(suggestions[0].post_count, 140);
        assert!(suggestions.windows(2).all(|w| w[0].post_count >= w[1].post_count));
    }

    #[test]
    fn test_tag_record_keeps_unknown_fields() {
        let json = r#"{"id":470575,"name":"1girl","post_count":5400000,"category":0,"is_deprecated":false}"#;
        let record: TagRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.name, "1girl");
        assert_eq!(record.post_count, 5_400_000);
        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["id"], 470575);
        assert_eq!(back["is_deprecated"], false);
    }

    #[test]
    fn test_post_record_to_source_post() {
        let json = r#"{
            "id": 1,
            "large_file_url": "https://cdn.example/sample.jpg",
            "file_url": "https://cdn.example/original.png",
            "tag_string_general": "1girl solo",
            "tag_string_character": "",
            "tag_string_artist": "someone",
            "tag_string_copyright": "original"
        }"#;
        let post: SourcePost = serde_json::from_str::<PostRecord>(json).unwrap().into();

        assert_eq!(post.image_url, "https://cdn.example/sample.jpg");
        assert_eq!(post.tag_string_general, "1girl solo");
        assert_eq!(post.tag_string_artist, "someone");
    }

    #[test]
    fn test_post_record_without_large_file() {
        let post: SourcePost = PostRecord {
            file_url: Some("https://cdn.example/original.png".to_string()),
            ..Default::default()
        }
        .into();
        assert_eq!(post.image_url, "https://cdn.example/original.png");
    }
}
