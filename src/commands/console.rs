//! Prompt-and-read console
//!
//! Reads one whitespace-delimited token per prompt. A line holding several
//! tokens answers several prompts in turn; blank lines are skipped.

use crate::core::{Word, YesNo};
use crate::error::{BankError, Result};
use crate::output::formatters::INVALID_RESPONSE;
use crate::output::print_rejection;
use log::trace;
use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Interactive console over any input/output pair
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's standard input and output
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Writer used for everything the session prints
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next whitespace-delimited token from the input
    ///
    /// # Errors
    ///
    /// Returns `BankError::InputClosed` at end of input, or
    /// `BankError::Console` if reading fails.
    pub fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                trace!("token: {token:?}");
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(BankError::InputClosed);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Print `text` without a newline and read one token
    ///
    /// # Errors
    ///
    /// Same as [`Console::next_token`], plus write failures.
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.next_token()
    }

    /// Ask a Y/N question, re-prompting until the answer parses
    ///
    /// # Errors
    ///
    /// Same as [`Console::prompt`].
    pub fn confirm(&mut self, question: &str) -> Result<YesNo> {
        let mut response = self.prompt(question)?;
        loop {
            if let Some(answer) = YesNo::parse(&response) {
                return Ok(answer);
            }
            response = self.prompt(INVALID_RESPONSE)?;
        }
    }

    /// Prompt for a word, re-prompting with the rejection reason until it is valid
    ///
    /// # Errors
    ///
    /// Same as [`Console::prompt`].
    pub fn read_word(&mut self, prompt: &str) -> Result<Word> {
        loop {
            let candidate = self.prompt(prompt)?;
            match Word::new(candidate) {
                Ok(word) => return Ok(word),
                Err(reason) => print_rejection(&mut self.output, &reason.to_string())?,
            }
        }
    }
}
