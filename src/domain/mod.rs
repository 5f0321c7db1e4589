pub mod config;
pub mod error;
pub mod name;
pub mod response;
pub mod wrap;

pub use config::{AppConfig, ErrorLogConfig, FeedsConfig, SessionConfig};
pub use error::{AppError, FeedError};
pub use name::Name;
pub use response::Response;
pub use wrap::word_wrap;
