use core::fmt::Display;
use core::str::FromStr;
use std::io::{BufRead, Write};

use crate::error::CliError;

/// Line-oriented prompt/answer channel.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: impl Display) -> Result<(), CliError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Next line without its terminator. `EndOfInput` once the stream is exhausted.
    pub fn read_line(&mut self) -> Result<String, CliError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn ask(&mut self, question: impl Display) -> Result<String, CliError> {
        self.say(question)?;
        self.read_line()
    }

    /// Ask for an item number. Surrounding whitespace is never part of one.
    pub fn ask_item_number(&mut self, question: impl Display) -> Result<String, CliError> {
        Ok(self.ask(question)?.trim().to_string())
    }

    /// Ask and parse the trimmed answer; `expected` names the kind in the error.
    pub fn ask_parsed<T: FromStr>(
        &mut self,
        question: impl Display,
        expected: &'static str,
    ) -> Result<T, CliError> {
        let answer = self.ask(question)?;
        answer
            .trim()
            .parse()
            .map_err(|_| CliError::Parse { input: answer, expected })
    }
}
