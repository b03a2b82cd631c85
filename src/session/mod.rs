//! Game sessions and the turn loop.
//!
//! A session seats one or two players in a shared range, then runs the
//! prompt → guess → evaluate → rotate cycle until each player has found
//! their secret number. Restarting is left to the caller:
//!
//! ```
//! use hilo::console::ScriptedIo;
//! use hilo::core::{GameConfig, GameRng, Player};
//! use hilo::session::GameSession;
//!
//! let mut session = GameSession::new(GameConfig::new(1, 1).unwrap(), Player::new(), GameRng::new(42));
//! let mut io = ScriptedIo::new(["n", "1", "n"]);
//!
//! loop {
//!     session.welcome(&mut io).unwrap();
//!     session.run_turn_loop(&mut io).unwrap();
//!     if !session.end_session(&mut io).unwrap() {
//!         break;
//!     }
//!     session.reset(Player::new());
//! }
//! ```

mod game;
mod history;
mod turn;

pub use game::{
    GameSession, CLOSING_MESSAGE, GUESS_PROMPT, HIGHER_MESSAGE, INVALID_INPUT_MESSAGE, LOWER_MESSAGE,
    MAX_PLAYERS, OUT_OF_RANGE_MESSAGE, SEPARATOR, WELCOME_MESSAGE,
};
pub use history::GuessRecord;
pub use turn::TurnOrder;
