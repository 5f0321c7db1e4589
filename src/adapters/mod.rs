mod chuck_norris_feed;
mod file_error_log;
mod json_feed;
mod random_name_feed;
mod terminal_console;

pub use chuck_norris_feed::{ChuckNorrisFeed, RandomJokeResponse};
pub use file_error_log::FileErrorLog;
pub use json_feed::JsonFeedClient;
pub use random_name_feed::{NameResponse, RandomNameFeed};
pub use terminal_console::TerminalConsole;
