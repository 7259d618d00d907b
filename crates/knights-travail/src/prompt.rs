//! Interactive input of squares.

use knight_core::{Position, PositionError};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use thiserror::Error;

/// Prompt shown before reading the start square.
pub const START_PROMPT: &str = "Enter start position in algebraic notation:";

/// Prompt shown before reading the end square.
pub const END_PROMPT: &str = "Enter end position in algebraic notation:";

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("unexpected end of input")]
    EndOfInput,
    #[error(transparent)]
    Position(#[from] PositionError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Reads whitespace-separated squares from a reader, writing prompts to a
/// writer.
///
/// Several squares may be typed on one line; the extra ones answer the
/// following prompts.
pub struct Prompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    /// Writes `prompt` and reads the next token. Blank lines are skipped.
    pub fn read_token(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(PromptError::EndOfInput);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Writes `prompt` and parses the next token as a square.
    pub fn read_position(&mut self, prompt: &str) -> Result<Position, PromptError> {
        let token = self.read_token(prompt)?;
        Ok(Position::from_algebraic(&token)?)
    }

    /// Consumes the prompter, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Create a prompter using stdin/stdout.
pub fn stdio_prompter() -> Prompter<std::io::StdinLock<'static>, std::io::Stdout> {
    Prompter::new(std::io::stdin().lock(), std::io::stdout())
}
