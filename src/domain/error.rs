use std::io;

use thiserror::Error;

/// Failure reported by an external JSON feed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// Transport failure or non-success HTTP status.
    #[error("Failed to get response ({uri}) due to errors: \n{details}")]
    Response { uri: String, details: String },

    /// The payload could not be decoded into the expected shape.
    #[error("Failed to deserialize response ({uri}) due to error: {details}")]
    Deserialize { uri: String, details: String },
}

impl FeedError {
    /// The request URI the failure relates to.
    pub fn uri(&self) -> &str {
        match self {
            FeedError::Response { uri, .. } | FeedError::Deserialize { uri, .. } => uri,
        }
    }
}

/// Library-wide error type for jokegen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A required input was absent.
    #[error("Missing required argument '{0}'")]
    MissingArgument(&'static str),

    /// An argument supplied by the program itself was unusable.
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: &'static str, message: String },

    /// A joke or name feed failed.
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// Console input reached end-of-stream.
    #[error("Console input was closed")]
    InputClosed,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn invalid_argument<S: Into<String>>(name: &'static str, message: S) -> Self {
        AppError::InvalidArgument { name, message: message.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers that map errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParse(_)
            | AppError::MissingArgument(_)
            | AppError::InvalidArgument { .. } => io::ErrorKind::InvalidInput,
            AppError::Feed(FeedError::Deserialize { .. }) => io::ErrorKind::InvalidData,
            AppError::Feed(FeedError::Response { .. }) => io::ErrorKind::Other,
            AppError::InputClosed => io::ErrorKind::UnexpectedEof,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_error_names_uri_and_details() {
        let err = FeedError::Response {
            uri: "https://api.example.test/jokes/random".into(),
            details: "500 Internal Server Error".into(),
        };
        let message = err.to_string();
        assert!(message.starts_with(
            "Failed to get response (https://api.example.test/jokes/random) due to errors"
        ));
        assert!(message.contains("500 Internal Server Error"));
    }

    #[test]
    fn deserialize_error_names_uri() {
        let err = FeedError::Deserialize { uri: "u".into(), details: "expected value".into() };
        assert_eq!(err.to_string(), "Failed to deserialize response (u) due to error: expected value");
        assert_eq!(err.uri(), "u");
    }

    #[test]
    fn feed_error_converts_transparently() {
        let feed = FeedError::Deserialize { uri: "u".into(), details: "bad".into() };
        let app: AppError = feed.clone().into();
        assert_eq!(app.to_string(), feed.to_string());
        assert_eq!(app.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn argument_errors_are_invalid_input() {
        assert_eq!(AppError::MissingArgument("text").kind(), io::ErrorKind::InvalidInput);
        let err = AppError::invalid_argument("prompt", "No prompt was provided.");
        assert_eq!(err.to_string(), "Invalid argument 'prompt': No prompt was provided.");
        assert_eq!(AppError::InputClosed.kind(), io::ErrorKind::UnexpectedEof);
    }
}
