//! # hilo
//!
//! A turn-based number guessing game for one or two players.
//!
//! Each player gets a secret number drawn from a shared inclusive range.
//! Players take turns guessing and receive `HI` (the secret is higher) or
//! `LO` (the secret is lower) until they find their own number.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: sessions own a `RandomRange` value instead
//!    of calling a global generator. Seeds make matches reproducible.
//!
//! 2. **I/O at the edge**: the session talks to players only through the
//!    `GameIo` trait. The terminal and scripted test input are both just
//!    implementations.
//!
//! 3. **One match per session run**: the turn loop returns when every
//!    player has won. Restarting is an explicit loop in the caller.
//!
//! ## Modules
//!
//! - `core`: players, range configuration, RNG, errors
//! - `rules`: guess evaluation and match results
//! - `console`: the `GameIo` contract with terminal and scripted backends
//! - `session`: player seats, turn rotation and the turn loop

pub mod console;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, Player, PlayerOrdinal, PlayerSlot, RandomRange};

pub use crate::rules::{evaluate_guess, Feedback, MatchSummary, PlayerResult};

pub use crate::console::{ConsoleIo, GameIo, GuessInput, ScriptedIo};

pub use crate::session::{GameSession, GuessRecord, TurnOrder};
