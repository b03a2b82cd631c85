//! Guess history for the current match.

use serde::{Deserialize, Serialize};

use crate::core::PlayerOrdinal;
use crate::rules::Feedback;

/// One parseable guess and how it was judged.
///
/// Unparseable input never produces a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// Who guessed.
    pub ordinal: PlayerOrdinal,
    /// The guessed value.
    pub guess: i32,
    /// Evaluation result.
    pub feedback: Feedback,
    /// The player's attempt count after this guess (1-based).
    pub attempt: u32,
}
