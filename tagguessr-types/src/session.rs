use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::{DateKey, Tag};

/// Result of submitting one guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GuessOutcome {
    /// Nothing left after normalization; session untouched
    Empty,
    AlreadyGuessed { tag: Tag },
    Correct { tag: Tag, points: i32 },
    Incorrect { tag: Tag },
}

impl GuessOutcome {
    pub fn points_earned(&self) -> i32 {
        match self {
            GuessOutcome::Correct { points, .. } => *points,
            _ => 0,
        }
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessOutcome::Empty => Ok(()),
            GuessOutcome::AlreadyGuessed { .. } => write!(f, "You already guessed that!"),
            GuessOutcome::Correct { points, .. } => write!(f, "Correct! +{} points", points),
            GuessOutcome::Incorrect { .. } => write!(f, "Incorrect guess."),
        }
    }
}

/// Result of asking for a hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum HintOutcome {
    Suggested { tag: Tag, penalty: i32 },
    Exhausted,
}

impl fmt::Display for HintOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintOutcome::Suggested { tag, penalty } => {
                write!(f, "Hint: \"{}\" has been autofilled. -{} points.", tag, penalty)
            }
            HintOutcome::Exhausted => write!(f, "No more unguessed tags left!"),
        }
    }
}

/// Time left until the next local midnight, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResetCountdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl fmt::Display for ResetCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hours {} minutes {} seconds",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// What the player sees after pressing "I'm done"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DailySummary {
    pub date_key: DateKey,
    pub score: i32,
    pub max_score: i32,
    pub perfect: bool,
    pub tags_found: usize,
    pub tags_total: usize,
    pub next_reset: ResetCountdown,
    pub share_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_messages() {
        let correct = GuessOutcome::Correct { tag: "solo".to_string(), points: 400 };
        assert_eq!(correct.to_string(), "Correct! +400 points");
        assert_eq!(correct.points_earned(), 400);

        let repeat = GuessOutcome::AlreadyGuessed { tag: "solo".to_string() };
        assert!(repeat.to_string().contains("already guessed"));
        assert_eq!(repeat.points_earned(), 0);

        let miss = GuessOutcome::Incorrect { tag: "cat".to_string() };
        assert_eq!(miss.to_string(), "Incorrect guess.");
    }

    #[test]
    fn test_hint_messages() {
        let hint = HintOutcome::Suggested { tag: "solo".to_string(), penalty: 10 };
        assert_eq!(hint.to_string(), "Hint: \"solo\" has been autofilled. -10 points.");
        assert_eq!(HintOutcome::Exhausted.to_string(), "No more unguessed tags left!");
    }

    #[test]
    fn test_countdown_display() {
        let countdown = ResetCountdown { hours: 5, minutes: 3, seconds: 59 };
        assert_eq!(countdown.to_string(), "5 hours 3 minutes 59 seconds");
    }
}
