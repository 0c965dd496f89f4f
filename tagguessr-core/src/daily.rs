use std::sync::Arc;
use tracing::info;

use tagguessr_types::{DailySummary, DateKey, GuessOutcome, HintOutcome, Puzzle, PuzzleError};

use crate::{GameConfig, GuessSession, PuzzleCache, ResetClock};

/// Ties the day's puzzle to a guess session and rolls both over at midnight
pub struct DailyGame {
    cache: PuzzleCache,
    clock: Arc<dyn ResetClock>,
    config: GameConfig,
    puzzle: Option<Arc<Puzzle>>,
    session: Option<GuessSession>,
}

impl DailyGame {
    pub fn new(cache: PuzzleCache, clock: Arc<dyn ResetClock>, config: GameConfig) -> Self {
        Self {
            cache,
            clock,
            config,
            puzzle: None,
            session: None,
        }
    }

    /// Load today's puzzle and open a session for it
    pub async fn start(&mut self) -> Result<Arc<Puzzle>, PuzzleError> {
        self.refresh().await?;
        self.puzzle
            .clone()
            .ok_or_else(|| PuzzleError::source_unavailable("no puzzle loaded"))
    }

    /// Reload if the calendar day changed since the last load.
    /// Returns true when a new puzzle (and a fresh session) replaced the old one.
    pub async fn refresh(&mut self) -> Result<bool, PuzzleError> {
        let today = self.clock.today();
        if self.puzzle.as_ref().is_some_and(|p| p.date_key == today) {
            return Ok(false);
        }

        let puzzle = Arc::new(self.cache.get_or_create(&today).await?);
        info!(
            "Daily puzzle ready for {} ({} tags)",
            today,
            puzzle.tag_count()
        );

        self.session = Some(
            GuessSession::new(puzzle.clone()).with_hint_penalty(self.config.hint_penalty),
        );
        self.puzzle = Some(puzzle);
        Ok(true)
    }

    /// `None` while no puzzle is loaded
    pub fn submit_guess(&mut self, raw: &str) -> Option<GuessOutcome> {
        self.session.as_mut().map(|s| s.submit_guess(raw))
    }

    pub fn request_hint(&mut self) -> Option<HintOutcome> {
        self.session.as_mut().map(|s| s.request_hint())
    }

    pub fn session(&self) -> Option<&GuessSession> {
        self.session.as_ref()
    }

    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_deref()
    }

    /// The "I'm done" summary for the current session
    pub fn finish(&self) -> Option<DailySummary> {
        let session = self.session.as_ref()?;
        let date_key = session.puzzle().date_key.clone();
        let score = session.score();

        Some(DailySummary {
            share_text: share_text(&date_key, score, &self.config),
            date_key,
            score,
            max_score: self.config.total_points,
            perfect: score >= self.config.perfect_threshold,
            tags_found: session.guessed_tags().len(),
            tags_total: session.puzzle().tag_count(),
            next_reset: self.clock.time_until_next_reset(),
        })
    }
}

/// Text copied to the clipboard for sharing a result
pub fn share_text(date_key: &DateKey, score: i32, config: &GameConfig) -> String {
    let mut text = format!(
        "TagGuessr {}\n{} / {} Pts",
        date_key, score, config.total_points
    );
    if score >= config.perfect_threshold {
        text.push_str("\nPerfect 🎉");
    }
    text
}
