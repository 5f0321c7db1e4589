//! Blocking prompts that re-ask until the user gives a valid answer.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{AppError, Response};
use crate::ports::Console;

pub const INVALID_SELECTION: &str = "Invalid selection.";
pub const LIST_INSTRUCTION: &str =
    "Please choose by entering the name or the corresponding number:";

// Leading and trailing whitespace is tolerated around the answer.
static YES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[Yy]([Ee][Ss])?\s*$").expect("yes pattern must compile"));
static NO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[Nn]([Oo])?\s*$").expect("no pattern must compile"));

/// Prompt engine over a console.
pub struct Prompter<'c, C: Console> {
    console: &'c mut C,
}

impl<'c, C: Console> Prompter<'c, C> {
    pub fn new(console: &'c mut C) -> Self {
        Self { console }
    }

    /// Ask a yes/no question; `true` when the answer is yes.
    pub fn is_yes(&mut self, prompt: &str) -> Result<bool, AppError> {
        Ok(self.prompt_yes_no(prompt)?.is_yes())
    }

    /// Ask a yes/no question until answered with `y`, `yes`, `n` or `no` in any case.
    ///
    /// The display is cleared after a valid answer.
    pub fn prompt_yes_no(&mut self, prompt: &str) -> Result<Response, AppError> {
        validate_prompt(prompt)?;

        loop {
            self.console.write_line(&format!("{} y/n", prompt))?;
            let line = self.console.read_line()?;

            if let Some(response) = line.as_deref().and_then(parse_yes_no) {
                self.console.clear()?;
                return Ok(response);
            }

            self.console.write_line(INVALID_SELECTION)?;
        }
    }

    /// Ask for a single digit from 1 to 9.
    ///
    /// The display is cleared after a valid answer.
    pub fn prompt_digit(&mut self, prompt: &str) -> Result<u8, AppError> {
        validate_prompt(prompt)?;

        loop {
            self.console.write_line(&format!("{} (1-9)", prompt))?;
            let line = self.console.read_line()?;

            if let Some(digit) = line.as_deref().and_then(parse_digit) {
                self.console.clear()?;
                return Ok(digit);
            }

            self.console.write_line(INVALID_SELECTION)?;
        }
    }

    /// Ask the user to pick one of `answers`, by 1-based number or by name.
    ///
    /// Absent answers are dropped and the rest are offered in ordinal order.
    /// Names match case-insensitively; the stored spelling is returned.
    /// Unlike the other prompts, the display is left as is afterwards.
    pub fn prompt_list<I>(&mut self, header: &str, answers: I) -> Result<String, AppError>
    where
        I: IntoIterator,
        I::Item: Into<Option<String>>,
    {
        if header.trim().is_empty() {
            return Err(AppError::invalid_argument("header", "No header was provided."));
        }

        let mut sorted: Vec<String> =
            answers.into_iter().filter_map(Into::<Option<String>>::into).collect();
        if sorted.is_empty() {
            return Err(AppError::invalid_argument(
                "answers",
                "No answers were provided to choose from.",
            ));
        }
        sorted.sort();

        loop {
            self.console.write_line(header)?;
            for (index, answer) in sorted.iter().enumerate() {
                self.console.write_line(&format!("{} - {}", index + 1, answer))?;
            }
            self.console.write_line(LIST_INSTRUCTION)?;

            let line = self.console.read_line()?;
            if let Some(choice) = line.as_deref().and_then(|line| match_choice(&sorted, line)) {
                return Ok(choice.to_string());
            }

            self.console.write_line(INVALID_SELECTION)?;
        }
    }
}

fn validate_prompt(prompt: &str) -> Result<(), AppError> {
    if prompt.trim().is_empty() {
        return Err(AppError::invalid_argument("prompt", "No prompt was provided."));
    }
    Ok(())
}

fn parse_yes_no(line: &str) -> Option<Response> {
    if YES.is_match(line) {
        Some(Response::Yes)
    } else if NO.is_match(line) {
        Some(Response::No)
    } else {
        None
    }
}

fn parse_digit(line: &str) -> Option<u8> {
    line.trim().parse::<u8>().ok().filter(|digit| (1..=9).contains(digit))
}

fn match_choice<'a>(sorted: &'a [String], line: &str) -> Option<&'a str> {
    let answer = line.trim();
    if answer.is_empty() {
        return None;
    }

    // A number never falls back to matching by name.
    if let Ok(index) = answer.parse::<i64>() {
        return usize::try_from(index)
            .ok()
            .filter(|index| (1..=sorted.len()).contains(index))
            .map(|index| sorted[index - 1].as_str());
    }

    let folded = answer.to_lowercase();
    sorted.iter().find(|candidate| candidate.to_lowercase() == folded).map(String::as_str)
}
