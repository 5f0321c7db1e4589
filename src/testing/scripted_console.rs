use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Console;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Line(String),
    Clear,
}

/// Console fake that replays scripted input and records everything written.
///
/// Once the script runs out, reads fail with `AppError::InputClosed`.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<Option<String>>,
    pub events: Vec<ConsoleEvent>,
    pub width: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_raw_inputs(inputs.into_iter().map(|s| Some(s.into())))
    }

    /// Script that may contain unreadable lines (`None`).
    pub fn with_raw_inputs(inputs: impl IntoIterator<Item = Option<String>>) -> Self {
        Self { inputs: inputs.into_iter().collect(), events: Vec::new(), width: 80 }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Lines written so far, in order.
    pub fn lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ConsoleEvent::Line(line) => Some(line.as_str()),
                ConsoleEvent::Clear => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.events.iter().filter(|event| **event == ConsoleEvent::Clear).count()
    }

    pub fn count_line(&self, text: &str) -> usize {
        self.lines().iter().filter(|line| **line == text).count()
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, text: &str) -> Result<(), AppError> {
        self.events.push(ConsoleEvent::Line(text.to_string()));
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        self.inputs.pop_front().ok_or(AppError::InputClosed)
    }

    fn clear(&mut self) -> Result<(), AppError> {
        self.events.push(ConsoleEvent::Clear);
        Ok(())
    }

    fn width(&self) -> usize {
        self.width
    }
}
