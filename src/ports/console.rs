use crate::domain::AppError;

/// Port for line-oriented interaction with the user.
pub trait Console {
    /// Write `text` followed by a line break.
    fn write_line(&mut self, text: &str) -> Result<(), AppError>;

    /// Block until the user enters a line.
    ///
    /// `Ok(None)` stands for an unreadable line and is treated like any other
    /// invalid answer. Implementations signal that input is exhausted with
    /// `AppError::InputClosed`.
    fn read_line(&mut self) -> Result<Option<String>, AppError>;

    /// Clear the display surface.
    fn clear(&mut self) -> Result<(), AppError>;

    /// Width of the display in characters.
    fn width(&self) -> usize;
}
