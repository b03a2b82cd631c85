//! Core engine types: players, configuration, RNG, errors.
//!
//! These are the leaf building blocks. Sessions compose them; nothing in
//! here performs I/O.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DEFAULT_MAX, DEFAULT_MIN};
pub use error::GameError;
pub use player::{Player, PlayerOrdinal, PlayerSlot, DEFAULT_NAME};
pub use rng::{GameRng, RandomRange};
