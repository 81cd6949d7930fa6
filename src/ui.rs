//! Text interface collaborators.
//!
//! The engine talks to the terminal only through these two traits, so tests
//! can substitute a transcript buffer and a scripted key sequence.

use std::io::{self, BufRead, Write};

/// Receives line-oriented game output.
pub trait Screen {
    /// Emits one line of text.
    fn line(&mut self, text: &str);
}

/// Supplies single-character responses to prompts.
pub trait Keypad {
    /// Reads one key. Returns `None` only when the input channel is closed.
    fn read_key(&mut self) -> Option<char>;
}

/// A [`Screen`] that prints to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleScreen;

impl Screen for ConsoleScreen {
    fn line(&mut self, text: &str) {
        println!("{text}");
        let _ = io::stdout().flush();
    }
}

/// A [`Keypad`] that reads lines from stdin and yields the first
/// non-whitespace character of each.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleKeypad;

impl Keypad for ConsoleKeypad {
    fn read_key(&mut self) -> Option<char> {
        let stdin = io::stdin();
        let mut input = String::new();
        loop {
            input.clear();
            match stdin.lock().read_line(&mut input) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {
                    if let Some(key) = input.trim().chars().next() {
                        return Some(key);
                    }
                    // Blank line; keep reading.
                }
            }
        }
    }
}
