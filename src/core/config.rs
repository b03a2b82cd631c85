//! Game configuration: the shared guessing range.
//!
//! Every player in a session guesses within the same inclusive range.
//! The range is validated once, here, so the rest of the engine can rely
//! on `min <= max`.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Default lower bound of the guessing range.
pub const DEFAULT_MIN: i32 = 1;

/// Default upper bound of the guessing range.
pub const DEFAULT_MAX: i32 = 100;

/// Inclusive guessing range for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct GameConfig {
    min: i32,
    max: i32,
}

impl GameConfig {
    /// Create a configuration for the range `[min, max]`.
    ///
    /// Fails with [`GameError::InvalidRange`] when `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self, GameError> {
        if min > max {
            return Err(GameError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Check whether a guess falls inside the range.
    #[must_use]
    pub const fn contains(&self, guess: i32) -> bool {
        guess >= self.min && guess <= self.max
    }
}

/// Unvalidated wire form; deserialization goes through `GameConfig::new`.
#[derive(Deserialize)]
struct RawRange {
    min: i32,
    max: i32,
}

impl TryFrom<RawRange> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        GameConfig::new(raw.min, raw.max)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl std::fmt::Display for GameConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
