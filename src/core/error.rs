//! Error type shared by the session and the console collaborator.

use super::player::PlayerOrdinal;

/// Everything that can stop or reject a game operation.
///
/// Unparseable guesses and out-of-range guesses are not errors; the turn
/// loop recovers from them in place.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Cannot add more than {capacity} players! This only allows max {capacity} players.")]
    CapacityExceeded { capacity: usize },
    #[error("Invalid guessing range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },
    #[error("No player enrolled as {0}")]
    UnknownPlayer(PlayerOrdinal),
    #[error("{0} has no secret number yet")]
    SecretNotAssigned(PlayerOrdinal),
    #[error("Input stream closed")]
    InputClosed,
    #[error("Console I/O error (error: {0})")]
    Io(#[from] std::io::Error),
}
