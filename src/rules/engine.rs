//! Guess evaluation and match results.
//!
//! Evaluation is a pure function of the range, the secret and the guess.
//! The session decides what to do with the feedback (turn advancement,
//! reporting).

use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::player::PlayerOrdinal;

/// Outcome of a single parseable guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    /// Guess lies outside the session range.
    OutOfRange,
    /// Secret is higher than the guess ("HI").
    Higher,
    /// Secret is lower than the guess ("LO").
    Lower,
    /// Guess equals the secret.
    Correct,
}

impl Feedback {
    /// Does this outcome pass the turn to the next active player?
    ///
    /// Out-of-range guesses keep the turn. Correct guesses retire the
    /// player instead of advancing.
    #[must_use]
    pub fn advances_turn(self) -> bool {
        matches!(self, Feedback::Higher | Feedback::Lower)
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        self == Feedback::Correct
    }
}

/// Evaluate a guess against a secret within the configured range.
///
/// The range check wins over the comparison, so a secret can never be
/// matched by an out-of-range guess.
#[must_use]
pub fn evaluate_guess(config: &GameConfig, secret: i32, guess: i32) -> Feedback {
    if !config.contains(guess) {
        Feedback::OutOfRange
    } else if guess < secret {
        Feedback::Higher
    } else if guess > secret {
        Feedback::Lower
    } else {
        Feedback::Correct
    }
}

/// Final standing of one player in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub ordinal: PlayerOrdinal,
    pub name: String,
    pub secret_number: i32,
    pub attempts: u32,
}

impl PlayerResult {
    /// Name followed by ordinal, as shown in banners.
    #[must_use]
    pub fn label(&self) -> String {
        self.ordinal.label_for(&self.name)
    }
}

/// Results of a completed match, in the order players found their numbers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub results: Vec<PlayerResult>,
}

impl MatchSummary {
    /// Number of players who found their number.
    #[must_use]
    pub fn winner_count(&self) -> usize {
        self.results.len()
    }

    /// Look up a player's result.
    #[must_use]
    pub fn result_for(&self, ordinal: PlayerOrdinal) -> Option<&PlayerResult> {
        self.results.iter().find(|r| r.ordinal == ordinal)
    }

    /// Sum of attempts across all players.
    #[must_use]
    pub fn total_attempts(&self) -> u32 {
        self.results.iter().map(|r| r.attempts).sum()
    }
}
