//! # Console
//!
//! Line-oriented terminal I/O for the menu screens.
//!
//! Generic over `BufRead`/`Write` so sessions can be driven by a script in
//! tests and by stdin/stdout in the binary.
//!
//! ## Numeric Prompts
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Plot length (meters): "                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_greater_than(raw, min)                                           │
//! │       │                                                                 │
//! │       ├── not a number ──► "❌ Error: ... enter a valid number" ─┐     │
//! │       ├── <= min ────────► "❌ Error: ... must be greater than" ─┤     │
//! │       │                                                          │     │
//! │       │                        ask again ◄───────────────────────┘     │
//! │       └── OK ──► value                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};

use farmtech_core::validation::{parse_greater_than, InputNumber};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// ANSI "clear screen, cursor home".
const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";

/// Width of the `=====` banner rules.
pub const RULE_WIDTH: usize = 50;

/// Terminal wrapper used by every screen.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
    pause_after_action: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool, pause_after_action: bool) -> Self {
        Console {
            input,
            output,
            clear_screen,
            pause_after_action,
        }
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes a `=====` framed title.
    pub fn banner(&mut self, title: &str) -> AppResult<()> {
        let rule = "=".repeat(RULE_WIDTH);
        self.say(&rule)?;
        self.say(format!("{title:^width$}", width = RULE_WIDTH))?;
        self.say(&rule)
    }

    /// Writes a `-----` separator.
    pub fn separator(&mut self) -> AppResult<()> {
        self.say("-".repeat(RULE_WIDTH))
    }

    /// Shows a prompt and reads one line, without the trailing newline.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so they end
    /// up as an invalid answer instead of an I/O failure.
    ///
    /// ## Errors
    /// - `InputClosed` when the input stream is exhausted
    pub fn line(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buffer = Vec::new();
        if self.input.read_until(b'\n', &mut buffer)? == 0 {
            return Err(AppError::InputClosed);
        }

        let text = String::from_utf8_lossy(&buffer);
        Ok(text.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Asks until the answer is one of `allowed`.
    pub fn choice(&mut self, prompt: &str, allowed: &[&str]) -> AppResult<String> {
        loop {
            let answer = self.line(prompt)?;
            let answer = answer.trim();
            if allowed.contains(&answer) {
                return Ok(answer.to_string());
            }
            self.say(format!("❌ Invalid option! Enter one of: {}", allowed.join(", ")))?;
        }
    }

    /// Asks until the answer is a number strictly greater than `min`.
    pub fn number<T: InputNumber>(&mut self, prompt: &str, field: &str, min: T) -> AppResult<T> {
        loop {
            let raw = self.line(prompt)?;
            match parse_greater_than(field, &raw, min) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(field, input = %raw, error = %err, "Rejected numeric input");
                    self.say(format!("❌ Error: {err}"))?;
                }
            }
        }
    }

    /// Clears the terminal when enabled.
    pub fn clear(&mut self) -> AppResult<()> {
        if self.clear_screen {
            write!(self.output, "{CLEAR_SEQUENCE}")?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Waits for ENTER when enabled.
    pub fn pause(&mut self) -> AppResult<()> {
        if self.pause_after_action {
            self.line("\nPress ENTER to continue...")?;
        }
        Ok(())
    }
}
