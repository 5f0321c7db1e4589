mod console;
mod error_log;
mod joke_feed;
mod name_feed;

pub use console::Console;
pub use error_log::ErrorLog;
pub use joke_feed::JokeFeed;
pub use name_feed::NameFeed;
