//! jokegen: an interactive joke generator.
//!
//! Jokes come from a joke feed, optionally filtered by category, and can have a
//! fixed name swapped for a random one from a name feed. Output is word-wrapped
//! to the terminal width.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

use adapters::{ChuckNorrisFeed, FileErrorLog, JsonFeedClient, RandomNameFeed, TerminalConsole};
use app::AppContext;
use app::session::run_session;

pub use app::config::{ConfigOverrides, load_config};
pub use domain::{AppConfig, AppError, FeedError, Name, Response, word_wrap};

/// Run an interactive session on the process terminal against the configured feeds.
///
/// Returns once the user declines more jokes or stdin is closed.
pub fn play(config: &AppConfig) -> Result<(), AppError> {
    let timeout = Duration::from_secs(config.feeds.timeout_secs);
    let joke_feed =
        ChuckNorrisFeed::new(JsonFeedClient::new(config.feeds.joke_api_url.clone(), timeout)?);
    let name_feed =
        RandomNameFeed::new(JsonFeedClient::new(config.feeds.name_api_url.clone(), timeout)?);

    let ctx = AppContext::new(joke_feed, name_feed);
    let mut console = TerminalConsole::stdio();
    let mut log = FileErrorLog::from_config(&config.error_log);

    run_session(&ctx, &config.session, &mut console, &mut log)
}
