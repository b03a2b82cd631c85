//! In-memory `GameIo` for tests and demos.

use std::collections::VecDeque;

use super::{is_yes, GameIo, GuessInput};
use crate::core::GameError;

/// One entry of a scripted transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranscriptLine {
    /// A question shown to the player, with the answer that was fed.
    Prompt { question: String, answer: String },
    /// A reported message.
    Report(String),
}

/// Feeds queued lines as answers and records everything shown.
///
/// Once the queue is empty every prompt fails with
/// [`GameError::InputClosed`].
#[derive(Clone, Debug, Default)]
pub struct ScriptedIo {
    input: VecDeque<String>,
    transcript: Vec<TranscriptLine>,
}

impl ScriptedIo {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Queue another answer.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    /// Answers not consumed yet.
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    #[must_use]
    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    /// Reported messages only, in order.
    pub fn reports(&self) -> impl Iterator<Item = &str> {
        self.transcript.iter().filter_map(|line| match line {
            TranscriptLine::Report(message) => Some(message.as_str()),
            TranscriptLine::Prompt { .. } => None,
        })
    }

    fn answer(&mut self, question: &str) -> Result<String, GameError> {
        let answer = self.input.pop_front().ok_or(GameError::InputClosed)?;
        self.transcript.push(TranscriptLine::Prompt {
            question: question.to_string(),
            answer: answer.clone(),
        });
        Ok(answer)
    }
}

impl GameIo for ScriptedIo {
    fn prompt_yes_no(&mut self, question: &str) -> Result<bool, GameError> {
        let answer = self.answer(question)?;
        Ok(is_yes(&answer))
    }

    fn prompt_integer(&mut self, question: &str) -> Result<GuessInput, GameError> {
        let answer = self.answer(question)?;
        Ok(GuessInput::parse(&answer))
    }

    fn report(&mut self, message: &str) -> Result<(), GameError> {
        self.transcript.push(TranscriptLine::Report(message.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_answers_in_order() {
        let mut io = ScriptedIo::new(["5", "y"]);

        assert_eq!(io.prompt_integer("Guess: ").unwrap(), GuessInput::Number(5));
        assert!(io.prompt_yes_no("Again? ").unwrap());
        assert_eq!(io.remaining_input(), 0);
        assert!(matches!(io.prompt_yes_no("Again? "), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_transcript_records_prompts_and_reports() {
        let mut io = ScriptedIo::default();
        io.push_line("abc");

        io.report("Turn: Player1").unwrap();
        io.prompt_integer("Enter your guess: ").unwrap();

        assert_eq!(
            io.transcript(),
            &[
                TranscriptLine::Report("Turn: Player1".into()),
                TranscriptLine::Prompt {
                    question: "Enter your guess: ".into(),
                    answer: "abc".into(),
                },
            ]
        );
        assert_eq!(io.reports().collect::<Vec<_>>(), vec!["Turn: Player1"]);
    }
}
