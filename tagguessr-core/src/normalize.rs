use std::collections::HashSet;
use tagguessr_types::{SourcePost, Tag};

/// Normalize player input into tag form: trimmed, lowercase, spaces as underscores.
/// Returns `None` when nothing is left.
pub fn normalize_tag(raw: &str) -> Option<Tag> {
    let tag = raw.trim().to_lowercase().replace(' ', "_");
    if tag.is_empty() { None } else { Some(tag) }
}

/// Collect the post's tags in group order (general, character, artist, copyright),
/// lowercased. A tag appearing in more than one group is kept once, at its first position.
pub fn extract_tags(post: &SourcePost) -> Vec<Tag> {
    let mut seen = HashSet::new();
    post.tag_groups()
        .into_iter()
        .flat_map(|group| group.split_whitespace())
        .map(str::to_lowercase)
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}
