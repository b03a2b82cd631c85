//! `GameIo` over a reader/writer pair.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::{is_yes, GameIo, GuessInput};
use crate::core::GameError;

/// Line-based console. Prompts are written without a trailing newline
/// and flushed before the read.
pub struct ConsoleIo<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleIo<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ask(&mut self, question: &str) -> Result<String, GameError> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> GameIo for ConsoleIo<R, W> {
    fn prompt_yes_no(&mut self, question: &str) -> Result<bool, GameError> {
        let line = self.ask(question)?;
        Ok(is_yes(&line))
    }

    fn prompt_integer(&mut self, question: &str) -> Result<GuessInput, GameError> {
        let line = self.ask(question)?;
        Ok(GuessInput::parse(&line))
    }

    fn report(&mut self, message: &str) -> Result<(), GameError> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }
}
