//! Rotation over the players that are still guessing.

use smallvec::SmallVec;

use crate::core::PlayerOrdinal;

/// Ordered list of active players with a rotating cursor.
///
/// Players leave the rotation once they find their number. With a single
/// active player, advancing keeps the same player on turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOrder {
    active: SmallVec<[PlayerOrdinal; 2]>,
    cursor: usize,
}

impl TurnOrder {
    /// Start a rotation with the given players, first one on turn.
    pub fn new(players: impl IntoIterator<Item = PlayerOrdinal>) -> Self {
        Self {
            active: players.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Player whose turn it is, `None` once everyone is done.
    #[must_use]
    pub fn current(&self) -> Option<PlayerOrdinal> {
        self.active.get(self.cursor).copied()
    }

    /// Pass the turn to the next active player.
    pub fn advance(&mut self) {
        if !self.active.is_empty() {
            self.cursor = (self.cursor + 1) % self.active.len();
        }
    }

    /// Remove the current player from the rotation.
    ///
    /// The next active player (in order, wrapping) takes the turn.
    pub fn retire_current(&mut self) -> Option<PlayerOrdinal> {
        if self.cursor >= self.active.len() {
            return None;
        }
        let retired = self.active.remove(self.cursor);
        if self.cursor >= self.active.len() {
            self.cursor = 0;
        }
        Some(retired)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.active.is_empty()
    }

    /// Players still guessing.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: PlayerOrdinal = PlayerOrdinal::FIRST;
    const P2: PlayerOrdinal = PlayerOrdinal::SECOND;

    #[test]
    fn test_single_player_keeps_turn() {
        let mut turns = TurnOrder::new([P1]);
        assert_eq!(turns.current(), Some(P1));

        turns.advance();
        assert_eq!(turns.current(), Some(P1));
    }

    #[test]
    fn test_two_players_alternate() {
        let mut turns = TurnOrder::new([P1, P2]);
        assert_eq!(turns.current(), Some(P1));

        turns.advance();
        assert_eq!(turns.current(), Some(P2));

        turns.advance();
        assert_eq!(turns.current(), Some(P1));
    }

    #[test]
    fn test_retire_first_passes_to_second() {
        let mut turns = TurnOrder::new([P1, P2]);

        assert_eq!(turns.retire_current(), Some(P1));
        assert_eq!(turns.current(), Some(P2));

        // Remaining player keeps the turn
        turns.advance();
        assert_eq!(turns.current(), Some(P2));
    }

    #[test]
    fn test_retire_last_wraps_to_first() {
        let mut turns = TurnOrder::new([P1, P2]);
        turns.advance();

        assert_eq!(turns.retire_current(), Some(P2));
        assert_eq!(turns.current(), Some(P1));
        assert_eq!(turns.remaining(), 1);
    }

    #[test]
    fn test_finishes_when_everyone_retired() {
        let mut turns = TurnOrder::new([P1, P2]);
        turns.retire_current();
        turns.retire_current();

        assert!(turns.is_finished());
        assert_eq!(turns.current(), None);
        assert_eq!(turns.retire_current(), None);

        // Advancing an empty rotation is a no-op
        turns.advance();
        assert_eq!(turns.current(), None);
    }
}
