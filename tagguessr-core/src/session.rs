use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

use tagguessr_types::{GuessOutcome, HintOutcome, Puzzle, ScoredTag, Tag};

use crate::{normalize_tag, DEFAULT_HINT_PENALTY};

pub const INITIAL_FEEDBACK: &str = "Start guessing!";

/// One player's progress against one puzzle. Never persisted.
#[derive(Debug, Clone)]
pub struct GuessSession {
    puzzle: Arc<Puzzle>,
    guessed_tags: Vec<Tag>,
    score: i32,
    feedback: String,
    hint_penalty: i32,
}

impl GuessSession {
    pub fn new(puzzle: Arc<Puzzle>) -> Self {
        Self {
            puzzle,
            guessed_tags: Vec::new(),
            score: 0,
            feedback: INITIAL_FEEDBACK.to_string(),
            hint_penalty: DEFAULT_HINT_PENALTY,
        }
    }

    pub fn with_hint_penalty(mut self, hint_penalty: i32) -> Self {
        self.hint_penalty = hint_penalty;
        self
    }

    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        let Some(guess) = normalize_tag(raw) else {
            return GuessOutcome::Empty;
        };

        let outcome = if self.has_guessed(&guess) {
            GuessOutcome::AlreadyGuessed { tag: guess }
        } else if let Some(points) = self.puzzle.find_tag(&guess).map(|t| t.points) {
            self.score += points;
            self.guessed_tags.push(guess.clone());
            GuessOutcome::Correct { tag: guess, points }
        } else {
            GuessOutcome::Incorrect { tag: guess }
        };

        debug!("Guess outcome: {:?} (score {})", outcome, self.score);
        self.feedback = outcome.to_string();
        outcome
    }

    pub fn request_hint(&mut self) -> HintOutcome {
        self.request_hint_with(&mut rand::thread_rng())
    }

    /// Suggest a random unguessed tag at the cost of the hint penalty.
    /// The tag is not marked as guessed; the player still has to submit it.
    pub fn request_hint_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> HintOutcome {
        let remaining: Vec<&ScoredTag> = self.remaining_tags().collect();
        let pick = remaining.choose(rng).map(|t| t.tag.clone());

        let outcome = match pick {
            Some(tag) => {
                self.score -= self.hint_penalty;
                HintOutcome::Suggested {
                    tag,
                    penalty: self.hint_penalty,
                }
            }
            None => HintOutcome::Exhausted,
        };

        self.feedback = outcome.to_string();
        outcome
    }

    /// Puzzle tags the player has not found yet, in puzzle order
    pub fn remaining_tags(&self) -> impl Iterator<Item = &ScoredTag> {
        self.puzzle
            .tags
            .iter()
            .filter(move |t| !self.has_guessed(&t.tag.to_lowercase()))
    }

    pub fn has_guessed(&self, tag: &str) -> bool {
        self.guessed_tags.iter().any(|g| g == tag)
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_tags().next().is_none()
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn guessed_tags(&self) -> &[Tag] {
        &self.guessed_tags
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}
