//! Game session: player seats, shared range and the turn loop.

use log::{debug, info, warn};

use super::history::GuessRecord;
use super::turn::TurnOrder;
use crate::console::{GameIo, GuessInput, YES};
use crate::core::{GameConfig, GameError, GameRng, Player, PlayerOrdinal, PlayerSlot, RandomRange};
use crate::rules::{evaluate_guess, Feedback, MatchSummary, PlayerResult};

/// Maximum number of players in one session.
pub const MAX_PLAYERS: usize = 2;

pub const WELCOME_MESSAGE: &str = "Welcome to the Number Guessing Game!";
pub const GUESS_PROMPT: &str = "Enter your guess: ";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter a valid number.";
pub const OUT_OF_RANGE_MESSAGE: &str = "Your guess is out of range. Try again.";
pub const HIGHER_MESSAGE: &str = "HI";
pub const LOWER_MESSAGE: &str = "LO";
pub const CLOSING_MESSAGE: &str = "Thanks for playing!";
pub const SEPARATOR: &str = "===================================================";

/// One match of the guessing game.
///
/// Owns the first player, an optional second seat, the random source used
/// to draw secret numbers, and the guess history of the current match.
pub struct GameSession<R = GameRng> {
    config: GameConfig,
    first: Player,
    second: PlayerSlot,
    rng: R,
    history: Vec<GuessRecord>,
}

impl<R: RandomRange> GameSession<R> {
    /// Create a session whose first player is `player`.
    pub fn new(config: GameConfig, player: Player, rng: R) -> Self {
        let mut session = Self {
            config,
            first: Player::new(),
            second: PlayerSlot::Empty,
            rng,
            history: Vec::new(),
        };
        session.add_first_player(player);
        session
    }

    /// Install `player` as player 1 and draw its secret number.
    ///
    /// Replaces any previous first player.
    pub fn add_first_player(&mut self, mut player: Player) {
        self.seat(&mut player, PlayerOrdinal::FIRST);
        self.first = player;
    }

    /// Install `player` as player 2 and draw its secret number.
    ///
    /// Fails with [`GameError::CapacityExceeded`] if the seat is taken; the
    /// session is left unchanged.
    pub fn add_second_player(&mut self, mut player: Player) -> Result<(), GameError> {
        if self.second.is_occupied() {
            warn!("Rejected {}: session already has {} players", player.name(), MAX_PLAYERS);
            return Err(GameError::CapacityExceeded { capacity: MAX_PLAYERS });
        }

        self.seat(&mut player, PlayerOrdinal::SECOND);
        self.second = PlayerSlot::Occupied(player);
        Ok(())
    }

    /// Prepare `player` for `ordinal` and forget any guesses made by the
    /// player who held that seat before.
    fn seat(&mut self, player: &mut Player, ordinal: PlayerOrdinal) {
        self.history.retain(|record| record.ordinal != ordinal);
        player.set_ordinal(ordinal);
        player.assign_secret_number(self.config.min(), self.config.max(), &mut self.rng);
        info!("{} joined as {} in range {}", player.label(), ordinal, self.config);
    }

    /// Start a fresh match in the same range.
    ///
    /// The second seat is emptied and the history cleared.
    pub fn reset(&mut self, player: Player) {
        self.second = PlayerSlot::Empty;
        self.history.clear();
        self.add_first_player(player);
    }

    /// Start a fresh match in a new range.
    pub fn reset_with_config(&mut self, config: GameConfig, player: Player) {
        self.config = config;
        self.reset(player);
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn first_player(&self) -> &Player {
        &self.first
    }

    #[must_use]
    pub fn second_player(&self) -> Option<&Player> {
        self.second.player()
    }

    /// Look up an enrolled player.
    #[must_use]
    pub fn player(&self, ordinal: PlayerOrdinal) -> Option<&Player> {
        match ordinal {
            PlayerOrdinal::FIRST => Some(&self.first),
            PlayerOrdinal::SECOND => self.second.player(),
            _ => None,
        }
    }

    fn player_mut(&mut self, ordinal: PlayerOrdinal) -> Option<&mut Player> {
        match ordinal {
            PlayerOrdinal::FIRST => Some(&mut self.first),
            PlayerOrdinal::SECOND => self.second.player_mut(),
            _ => None,
        }
    }

    /// Ordinals of enrolled players, in turn order.
    pub fn enrolled(&self) -> impl Iterator<Item = PlayerOrdinal> + '_ {
        std::iter::once(PlayerOrdinal::FIRST)
            .chain(self.second.player().map(Player::ordinal))
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.enrolled().count()
    }

    /// Every parseable guess of the current match, in order.
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Has this player found their number in the current match?
    #[must_use]
    pub fn has_won(&self, ordinal: PlayerOrdinal) -> bool {
        self.history
            .iter()
            .any(|record| record.ordinal == ordinal && record.feedback.is_correct())
    }

    /// True once every enrolled player has won.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.enrolled().all(|ordinal| self.has_won(ordinal))
    }

    /// Count and judge one guess for `ordinal`.
    ///
    /// The attempt is recorded whatever the outcome, out-of-range guesses
    /// included.
    pub fn submit_guess(&mut self, ordinal: PlayerOrdinal, guess: i32) -> Result<Feedback, GameError> {
        let config = self.config;
        let player = self
            .player_mut(ordinal)
            .ok_or(GameError::UnknownPlayer(ordinal))?;
        let secret = player
            .secret_number()
            .ok_or(GameError::SecretNotAssigned(ordinal))?;

        player.record_attempt();
        let attempt = player.attempts();
        let feedback = evaluate_guess(&config, secret, guess);
        debug!("{} guessed {} (attempt {}): {:?}", player.label(), guess, attempt, feedback);

        self.history.push(GuessRecord {
            ordinal,
            guess,
            feedback,
            attempt,
        });
        Ok(feedback)
    }

    /// Results of players who have won so far, in winning order.
    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        let results = self
            .history
            .iter()
            .filter(|record| record.feedback.is_correct())
            .filter_map(|record| {
                let player = self.player(record.ordinal)?;
                Some(PlayerResult {
                    ordinal: record.ordinal,
                    name: player.name().to_string(),
                    secret_number: record.guess,
                    attempts: record.attempt,
                })
            })
            .collect();

        MatchSummary { results }
    }

    /// Greet the players and offer a seat to a second one.
    ///
    /// A rejected second player is reported through `io`; play continues
    /// with the players already seated.
    pub fn welcome<I: GameIo + ?Sized>(&mut self, io: &mut I) -> Result<(), GameError> {
        io.report(WELCOME_MESSAGE)?;

        let question = format!("Will another person play({},N)?", YES);
        if io.prompt_yes_no(&question)? {
            match self.add_second_player(Player::new()) {
                Err(err @ GameError::CapacityExceeded { .. }) => io.report(&err.to_string())?,
                other => other?,
            }
        }
        Ok(())
    }

    /// Prompt, evaluate and rotate turns until every player has won.
    pub fn run_turn_loop<I: GameIo + ?Sized>(&mut self, io: &mut I) -> Result<MatchSummary, GameError> {
        let mut turns = TurnOrder::new(self.enrolled().filter(|&ordinal| !self.has_won(ordinal)));
        info!("Match started with {} player(s) in range {}", turns.remaining(), self.config);

        while let Some(ordinal) = turns.current() {
            let label = self
                .player(ordinal)
                .ok_or(GameError::UnknownPlayer(ordinal))?
                .label();
            io.report(&format!("Turn: {}", label))?;

            let guess = match io.prompt_integer(GUESS_PROMPT)? {
                GuessInput::Number(guess) => guess,
                GuessInput::Unparseable(raw) => {
                    debug!("{} entered unparseable input {:?}", label, raw);
                    io.report(INVALID_INPUT_MESSAGE)?;
                    continue;
                }
            };

            let feedback = self.submit_guess(ordinal, guess)?;
            match feedback {
                Feedback::OutOfRange => io.report(OUT_OF_RANGE_MESSAGE)?,
                Feedback::Higher => io.report(HIGHER_MESSAGE)?,
                Feedback::Lower => io.report(LOWER_MESSAGE)?,
                Feedback::Correct => {
                    let attempts = self.player(ordinal).map_or(0, Player::attempts);
                    io.report(&format!(
                        "{} guessed the mystery number {} in {} attempts!",
                        label, guess, attempts
                    ))?;
                    info!("{} won after {} attempts", label, attempts);
                    turns.retire_current();
                }
            }
            if feedback.advances_turn() {
                turns.advance();
            }
        }

        Ok(self.summary())
    }

    /// Say goodbye and ask whether to play again.
    ///
    /// Returns the restart request; the caller decides what to do with it.
    pub fn end_session<I: GameIo + ?Sized>(&mut self, io: &mut I) -> Result<bool, GameError> {
        io.report(CLOSING_MESSAGE)?;
        io.report(SEPARATOR)?;
        io.prompt_yes_no(&format!("Would you like to play it again({},N)?", YES))
    }
}
