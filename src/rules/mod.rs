//! Guess evaluation rules.
//!
//! - `evaluate_guess`: range check, then comparison with the secret
//! - `Feedback`: HI / LO / correct / out of range
//! - `MatchSummary`: per-player results once a match is over

pub mod engine;

pub use engine::{evaluate_guess, Feedback, MatchSummary, PlayerResult};
