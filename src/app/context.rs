use crate::app::categories::CategoryCache;
use crate::app::jokes::JokeService;
use crate::domain::AppError;
use crate::ports::{JokeFeed, NameFeed};

/// Application context holding the feeds and the state shared across a run.
pub struct AppContext<J: JokeFeed, N: NameFeed> {
    jokes: JokeService<J, N>,
    categories: CategoryCache,
}

impl<J: JokeFeed, N: NameFeed> AppContext<J, N> {
    /// Create a new application context.
    pub fn new(joke_feed: J, name_feed: N) -> Self {
        Self { jokes: JokeService::new(joke_feed, name_feed), categories: CategoryCache::new() }
    }

    /// Get a reference to the joke service.
    pub fn jokes(&self) -> &JokeService<J, N> {
        &self.jokes
    }

    /// Joke categories, fetched on first use and reused for the rest of the run.
    pub fn categories(&self) -> Result<&[String], AppError> {
        self.categories.get_or_fetch(self.jokes.joke_feed())
    }
}
