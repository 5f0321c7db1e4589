//! Console port backed by the process terminal.

use std::io::{self, BufRead};

use console::Term;

use crate::domain::AppError;
use crate::ports::Console;

/// Width used when stdout is not attached to a terminal.
pub const DEFAULT_WIDTH: usize = 80;

/// Writes to stdout through `console::Term` and reads lines from `input`.
pub struct TerminalConsole<R: BufRead> {
    term: Term,
    input: R,
}

impl TerminalConsole<io::StdinLock<'static>> {
    /// Console over the process stdout and stdin.
    pub fn stdio() -> Self {
        Self::with_input(Term::stdout(), io::stdin().lock())
    }
}

impl<R: BufRead> TerminalConsole<R> {
    pub fn with_input(term: Term, input: R) -> Self {
        Self { term, input }
    }
}

impl<R: BufRead> Console for TerminalConsole<R> {
    fn write_line(&mut self, text: &str) -> Result<(), AppError> {
        self.term.write_line(text)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }

        // Undecodable bytes count as an unreadable answer, not a failure.
        let Ok(mut line) = String::from_utf8(buf) else {
            return Ok(None);
        };
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn clear(&mut self) -> Result<(), AppError> {
        if self.term.is_term() {
            self.term.clear_screen()?;
        }
        Ok(())
    }

    fn width(&self) -> usize {
        match self.term.size_checked() {
            Some((_, columns)) if columns > 0 => usize::from(columns),
            _ => DEFAULT_WIDTH,
        }
    }
}
