//! Prompter Port
//!
//! Line-oriented operator input. Implementations can read from the terminal
//! (`ConsolePrompter`) or, in tests, replay a fixed script (`ScriptedPrompter`).

#[cfg(test)]
use std::collections::VecDeque;
use std::io;

/// Trait for reading one line of operator input.
pub trait Prompter {
    /// Show `prompt` and return the line entered, without its line terminator.
    ///
    /// End of input reads as an empty line.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        (**self).ask(prompt)
    }
}

/// Prompter that replays prepared answers in order.
///
/// Once the script is exhausted every prompt answers with an empty line.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.asked.push(prompt.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

/// Whether an answer to a `(y/N)` question is affirmative.
///
/// Only `y` or `Y` counts; surrounding whitespace is not stripped.
pub fn is_affirmative(answer: &str) -> bool {
    answer.to_lowercase() == "y"
}
