#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tagguessr_core::{
    GameConfig, KeyValueStore, MemoryStore, PostSource, PuzzleCache, PuzzleGenerator, ResetClock,
    TagFrequencyClient, date_key_for, time_until_next_reset,
};
use tagguessr_types::{DateKey, PuzzleError, ResetCountdown, SourcePost};

use chrono::{DateTime, Duration, FixedOffset};

/// Hands out queued posts in order; fails once the queue is empty
pub struct FakePostSource {
    posts: Mutex<VecDeque<SourcePost>>,
    calls: AtomicUsize,
}

impl FakePostSource {
    pub fn new(posts: Vec<SourcePost>) -> Self {
        Self {
            posts: Mutex::new(posts.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostSource for FakePostSource {
    async fn random_post(&self) -> Result<SourcePost, PuzzleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.posts
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| PuzzleError::source_unavailable("no candidate posts"))
    }
}

/// Popularity counts keyed by tag; tags listed in `failing` error out
pub struct FakeTagCounts {
    counts: HashMap<String, u64>,
    failing: HashSet<String>,
    calls: AtomicUsize,
}

impl FakeTagCounts {
    pub fn new(counts: &[(&str, u64)]) -> Self {
        Self {
            counts: counts.iter().map(|(t, c)| (t.to_string(), *c)).collect(),
            failing: HashSet::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_on(mut self, tag: &str) -> Self {
        self.failing.insert(tag.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TagFrequencyClient for FakeTagCounts {
    async fn lookup_count(&self, tag: &str) -> Result<u64, PuzzleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(tag) {
            return Err(PuzzleError::lookup_failed(tag, "upstream returned 502"));
        }
        Ok(self.counts.get(tag).copied().unwrap_or(1))
    }
}

/// Clock pinned to a settable instant
pub struct FixedClock {
    now: Mutex<DateTime<FixedOffset>>,
}

impl FixedClock {
    pub fn at(rfc3339: &str) -> Self {
        Self {
            now: Mutex::new(DateTime::parse_from_rfc3339(rfc3339).unwrap()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl ResetClock for FixedClock {
    fn today(&self) -> DateKey {
        date_key_for(&*self.now.lock().unwrap())
    }

    fn time_until_next_reset(&self) -> ResetCountdown {
        time_until_next_reset(&*self.now.lock().unwrap())
    }
}

pub fn create_post(image: &str, general: &str, character: &str, artist: &str, copyright: &str) -> SourcePost {
    SourcePost {
        image_url: image.to_string(),
        tag_string_general: general.to_string(),
        tag_string_character: character.to_string(),
        tag_string_artist: artist.to_string(),
        tag_string_copyright: copyright.to_string(),
    }
}

/// Two distinct posts, so a second generation is distinguishable from the first
pub fn create_two_posts() -> Vec<SourcePost> {
    vec![
        create_post("https://cdn.example/first.jpg", "1girl solo", "", "", ""),
        create_post("https://cdn.example/second.jpg", "cat outdoors", "", "", ""),
    ]
}

pub struct TestCache {
    pub cache: PuzzleCache,
    pub store: MemoryStore,
    pub posts: Arc<FakePostSource>,
    pub counts: Arc<FakeTagCounts>,
}

pub fn create_test_cache(posts: Vec<SourcePost>, counts: FakeTagCounts) -> TestCache {
    create_test_cache_with_config(posts, counts, &GameConfig::default())
}

pub fn create_test_cache_with_config(
    posts: Vec<SourcePost>,
    counts: FakeTagCounts,
    config: &GameConfig,
) -> TestCache {
    let store = MemoryStore::new();
    let posts = Arc::new(FakePostSource::new(posts));
    let counts = Arc::new(counts);
    let generator = PuzzleGenerator::new(posts.clone(), counts.clone());
    let cache = PuzzleCache::new(
        Arc::new(store.clone()) as Arc<dyn KeyValueStore>,
        generator,
        config,
    );

    TestCache {
        cache,
        store,
        posts,
        counts,
    }
}
