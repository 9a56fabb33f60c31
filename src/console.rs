//! Line-oriented console port.
//!
//! Everything the game reads or prints goes through [`Console`], so a match
//! can run against a real terminal or a scripted session in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::{GameError, Result};

/// Text input/output used by players and the referee.
pub trait Console {
    /// Show `prompt` and block until a line is entered.
    ///
    /// The returned line has its line terminator removed.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Print `text` exactly as given.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Print `text` followed by a line break.
    fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}

/// Console over any buffered reader and writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::EndOfInput {
                prompt: prompt.trim().to_string(),
            });
        }

        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}

/// In-memory console that replays canned answers and records a transcript.
///
/// Answers are echoed into the transcript after their prompt, the way they
/// would appear on a terminal.
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: String,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: String::new(),
        }
    }

    /// Everything written so far, prompts and echoed answers included.
    #[must_use]
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.transcript.push_str(prompt);
        let answer = self.answers.pop_front().ok_or_else(|| GameError::EndOfInput {
            prompt: prompt.trim().to_string(),
        })?;
        self.transcript.push_str(&answer);
        self.transcript.push('\n');
        Ok(answer)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.transcript.push_str(text);
        Ok(())
    }
}
