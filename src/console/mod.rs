//! Text I/O collaborator used by sessions.
//!
//! Sessions never touch stdin/stdout directly. They prompt and report
//! through a `GameIo` implementation:
//!
//! - [`ConsoleIo`]: any `BufRead` + `Write` pair, usually the terminal
//! - [`ScriptedIo`]: queued input lines and a recorded transcript

mod scripted;
mod terminal;

pub use scripted::{ScriptedIo, TranscriptLine};
pub use terminal::ConsoleIo;

use crate::core::GameError;

/// Answer that counts as "yes" in yes/no prompts (case-insensitive).
pub const YES: &str = "Y";

/// Result of asking the player for a number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessInput {
    /// The line parsed as an integer.
    Number(i32),
    /// The line did not parse; holds the trimmed text.
    Unparseable(String),
}

impl GuessInput {
    /// Parse one input line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.parse() {
            Ok(number) => GuessInput::Number(number),
            Err(_) => GuessInput::Unparseable(trimmed.to_string()),
        }
    }
}

/// Does an input line answer "yes"?
#[must_use]
pub fn is_yes(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(YES)
}

/// Player-facing prompts and messages.
pub trait GameIo {
    /// Ask a yes/no question. True iff the answer is `Y` (any case).
    fn prompt_yes_no(&mut self, question: &str) -> Result<bool, GameError>;

    /// Ask for an integer.
    fn prompt_integer(&mut self, question: &str) -> Result<GuessInput, GameError>;

    /// Show one line of text.
    fn report(&mut self, message: &str) -> Result<(), GameError>;
}
