use crate::domain::AppError;

/// Port for recording errors the user only sees an apology for.
pub trait ErrorLog {
    /// Record the full detail of `error`. Failures to record are not reported back.
    fn record(&mut self, error: &AppError);
}
