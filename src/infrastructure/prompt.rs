//! Console Prompter
//!
//! Uses `dialoguer::Input` when both stdin and stdout are terminals and falls
//! back to plain line reads otherwise, so the guide can be driven from a pipe.
//! Both paths put the question on stdout, next to the guide text.

use std::io::{self, BufRead, Write};

use dialoguer::console::Term;
use dialoguer::Input;

use crate::domain::ports::Prompter;
use crate::ui::theme::GuideTheme;

pub struct ConsolePrompter {
    interactive: bool,
    theme: GuideTheme,
    term: Term,
}

impl ConsolePrompter {
    pub fn new(interactive: bool, color: bool) -> Self {
        Self {
            interactive,
            theme: GuideTheme::new(color),
            term: Term::stdout(),
        }
    }

    fn ask_interactive(&self, prompt: &str) -> io::Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(io::Error::from)
    }
}

impl Prompter for ConsolePrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        if self.interactive {
            return self.ask_interactive(prompt);
        }

        let mut stdout = io::stdout().lock();
        write!(stdout, "{} ", prompt)?;
        stdout.flush()?;
        drop(stdout);

        let answer = read_answer(&mut io::stdin().lock())?;
        // Piped input is not echoed; end the prompt line ourselves.
        println!();
        Ok(answer)
    }
}

/// Read one line and strip its terminator. EOF reads as an empty answer.
pub(crate) fn read_answer(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
