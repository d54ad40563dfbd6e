//! Confirmation input
//!
//! `clear` asks for a single character before deleting anything. The
//! `Prompt` trait lets tests answer without a terminal.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::error::ExpenseResult;

/// Source of single-character answers
pub trait Prompt {
    /// Read one character; `None` when there is no character to read
    fn read_char(&mut self) -> ExpenseResult<Option<char>>;
}

/// Reads answers from the process's standard input
///
/// On an interactive terminal a single keystroke is read in raw mode, so the
/// user doesn't need to press Enter. Piped input is read one line at a time
/// and its first character is the answer.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for TerminalPrompt {
    fn read_char(&mut self) -> ExpenseResult<Option<char>> {
        if io::stdin().is_terminal() {
            read_keystroke()
        } else {
            read_line_char(&mut io::stdin().lock())
        }
    }
}

/// Read one key press in raw mode, restoring the terminal afterwards
fn read_keystroke() -> ExpenseResult<Option<char>> {
    enable_raw_mode()?;
    let key = next_key_char();
    disable_raw_mode()?;
    key
}

fn next_key_char() -> ExpenseResult<Option<char>> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            return Ok(match key.code {
                KeyCode::Char(c) => Some(c),
                _ => None,
            });
        }
    }
}

/// Read one line and return its first character
fn read_line_char<R: BufRead>(reader: &mut R) -> ExpenseResult<Option<char>> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.chars().next().filter(|c| *c != '\n' && *c != '\r'))
}

/// Prompt that replays preset answers, then reports no input
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<char>,
    asked: usize,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = char>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: 0,
        }
    }

    /// Number of times an answer was requested
    pub fn asked(&self) -> usize {
        self.asked
    }
}

impl Prompt for ScriptedPrompt {
    fn read_char(&mut self) -> ExpenseResult<Option<char>> {
        self.asked += 1;
        Ok(self.answers.pop_front())
    }
}
