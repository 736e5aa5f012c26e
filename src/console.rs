//! Console boundary.
//!
//! All prompting and reading goes through [`Console`], which wraps any
//! buffered reader and writer. The binary hands it locked stdin/stdout;
//! tests hand it a `Cursor` and a `Vec<u8>`.
//!
//! Validation loops live here: empty text, a non yes/no reply or a bad count
//! is answered with another prompt, never an error.

use crate::error::{QuizError, Result};
use log::warn;
use std::io::{BufRead, Write};

/// Prompts and reads player input over any buffered reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Consumes the console and returns the writer (for inspecting output in tests).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints one line.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn blank_line(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Prints `prompt` without a newline, then reads one trimmed line.
    ///
    /// Returns `InputClosed` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(QuizError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Reads until the player types something non-empty.
    pub fn ask_non_empty(&mut self, prompt: &str, retry_message: &str) -> Result<String> {
        loop {
            let input = self.read_line(prompt)?;
            if !input.is_empty() {
                return Ok(input);
            }
            self.say(retry_message)?;
        }
    }

    /// Reads until the player types `yes` or `no` (any case).
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        let mut response = self.read_line(prompt)?;
        loop {
            if response.eq_ignore_ascii_case("yes") {
                return Ok(true);
            }
            if response.eq_ignore_ascii_case("no") {
                return Ok(false);
            }
            warn!("Expected yes/no, got {:?}", response);
            response = self.read_line("Please type 'yes' or 'no': ")?;
        }
    }

    /// Reads until the player types a whole number greater than zero.
    pub fn ask_count(&mut self, prompt: &str) -> Result<usize> {
        loop {
            let input = self.read_line(prompt)?;
            match input.parse::<usize>() {
                Ok(count) if count > 0 => return Ok(count),
                _ => {
                    warn!("Expected a positive count, got {:?}", input);
                    self.say("Please enter a whole number greater than zero.")?;
                }
            }
        }
    }
}
