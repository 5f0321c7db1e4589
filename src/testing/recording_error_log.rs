use crate::domain::AppError;
use crate::ports::ErrorLog;

/// Error log fake keeping the message of every recorded error.
#[derive(Debug, Default)]
pub struct RecordingErrorLog {
    pub messages: Vec<String>,
}

impl ErrorLog for RecordingErrorLog {
    fn record(&mut self, error: &AppError) {
        self.messages.push(error.to_string());
    }
}
