//! Player identity, secret number and attempt tracking.
//!
//! ## PlayerOrdinal
//!
//! Turn position and display label: 1 for the first player, 2 for the
//! second.
//!
//! ## PlayerSlot
//!
//! The optional second seat of a session. Either `Empty` or holds a
//! `Player`.

use serde::{Deserialize, Serialize};

use super::rng::RandomRange;

/// Default display name for new players.
pub const DEFAULT_NAME: &str = "Player";

/// 1-based player position within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerOrdinal(pub u8);

impl PlayerOrdinal {
    /// The first player.
    pub const FIRST: PlayerOrdinal = PlayerOrdinal(1);

    /// The second player.
    pub const SECOND: PlayerOrdinal = PlayerOrdinal(2);

    /// Create a new ordinal.
    #[must_use]
    pub const fn new(ordinal: u8) -> Self {
        Self(ordinal)
    }

    /// Get the raw ordinal value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Display label for a player seated here: name followed by ordinal,
    /// e.g. `Player1`.
    #[must_use]
    pub fn label_for(self, name: &str) -> String {
        format!("{}{}", name, self.0)
    }
}

impl std::fmt::Display for PlayerOrdinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player #{}", self.0)
    }
}

/// A participant in a guessing match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    ordinal: PlayerOrdinal,
    name: String,
    secret_number: Option<i32>,
    attempts: u32,
}

impl Player {
    /// Create a player with the default name and no secret number.
    #[must_use]
    pub fn new() -> Self {
        Self::named(DEFAULT_NAME)
    }

    /// Create a player with a custom display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            ordinal: PlayerOrdinal::FIRST,
            name: name.into(),
            secret_number: None,
            attempts: 0,
        }
    }

    /// Position of this player in its session.
    #[must_use]
    pub fn ordinal(&self) -> PlayerOrdinal {
        self.ordinal
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number this player has to find, once assigned.
    #[must_use]
    pub fn secret_number(&self) -> Option<i32> {
        self.secret_number
    }

    /// Number of guesses submitted so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Name followed by ordinal, e.g. `Player1`.
    #[must_use]
    pub fn label(&self) -> String {
        self.ordinal.label_for(&self.name)
    }

    /// Draw a new secret number uniformly from `[min, max]`.
    ///
    /// Overwrites any previous secret.
    pub fn assign_secret_number(&mut self, min: i32, max: i32, rng: &mut impl RandomRange) {
        assert!(min <= max, "Range minimum must not exceed maximum");
        self.secret_number = Some(rng.random_in(min, max));
    }

    /// Count one more guess.
    pub fn record_attempt(&mut self) {
        self.attempts = self.attempts.saturating_add(1);
    }

    pub(crate) fn set_ordinal(&mut self, ordinal: PlayerOrdinal) {
        self.ordinal = ordinal;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A seat that may or may not hold a player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PlayerSlot {
    #[default]
    Empty,
    Occupied(Player),
}

impl PlayerSlot {
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self, PlayerSlot::Occupied(_))
    }

    #[must_use]
    pub fn player(&self) -> Option<&Player> {
        match self {
            PlayerSlot::Occupied(player) => Some(player),
            PlayerSlot::Empty => None,
        }
    }

    pub fn player_mut(&mut self) -> Option<&mut Player> {
        match self {
            PlayerSlot::Occupied(player) => Some(player),
            PlayerSlot::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    struct Fixed(i32);

    impl RandomRange for Fixed {
        fn random_in(&mut self, _min: i32, _max: i32) -> i32 {
            self.0
        }
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new();
        assert_eq!(player.name(), "Player");
        assert_eq!(player.attempts(), 0);
        assert_eq!(player.secret_number(), None);
        assert_eq!(player.ordinal(), PlayerOrdinal::FIRST);
    }

    #[test]
    fn test_named_player() {
        let player = Player::named("Ada");
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.label(), "Ada1");
    }

    #[test]
    fn test_label_follows_ordinal() {
        let mut player = Player::new();
        player.set_ordinal(PlayerOrdinal::SECOND);
        assert_eq!(player.label(), "Player2");
    }

    #[test]
    fn test_assign_secret_number_in_range() {
        let mut rng = GameRng::new(42);
        let mut player = Player::new();

        for _ in 0..100 {
            player.assign_secret_number(1, 10, &mut rng);
            let secret = player.secret_number().unwrap();
            assert!((1..=10).contains(&secret));
        }
    }

    #[test]
    fn test_assign_secret_number_overwrites() {
        let mut player = Player::new();
        player.assign_secret_number(1, 100, &mut Fixed(7));
        assert_eq!(player.secret_number(), Some(7));

        player.assign_secret_number(1, 100, &mut Fixed(50));
        assert_eq!(player.secret_number(), Some(50));
    }

    #[test]
    #[should_panic(expected = "Range minimum must not exceed maximum")]
    fn test_assign_secret_number_reversed_range() {
        let mut player = Player::new();
        player.assign_secret_number(10, 1, &mut GameRng::new(1));
    }

    #[test]
    fn test_record_attempt() {
        let mut player = Player::new();
        for expected in 1..=5 {
            player.record_attempt();
            assert_eq!(player.attempts(), expected);
        }
    }

    #[test]
    fn test_ordinal_display() {
        assert_eq!(format!("{}", PlayerOrdinal::SECOND), "Player #2");
        assert_eq!(PlayerOrdinal::new(1), PlayerOrdinal::FIRST);
        assert_eq!(PlayerOrdinal::SECOND.get(), 2);
        assert_eq!(PlayerOrdinal::SECOND.label_for("Bo"), "Bo2");
    }

    #[test]
    fn test_player_slot() {
        let mut slot = PlayerSlot::default();
        assert!(!slot.is_occupied());
        assert!(slot.player().is_none());

        slot = PlayerSlot::Occupied(Player::named("Bo"));
        assert!(slot.is_occupied());
        assert_eq!(slot.player().map(Player::name), Some("Bo"));

        if let Some(player) = slot.player_mut() {
            player.record_attempt();
        }
        assert_eq!(slot.player().map(Player::attempts), Some(1));
    }
}
