//! Joke feed port definition.

use crate::domain::FeedError;

/// Port for an external provider of jokes.
pub trait JokeFeed {
    /// Fetch the text of one random joke, restricted to `category` when given.
    fn random_joke(&self, category: Option<&str>) -> Result<String, FeedError>;

    /// Fetch the categories the provider can filter by.
    fn categories(&self) -> Result<Vec<String>, FeedError>;
}

impl<T: JokeFeed + ?Sized> JokeFeed for &T {
    fn random_joke(&self, category: Option<&str>) -> Result<String, FeedError> {
        (**self).random_joke(category)
    }

    fn categories(&self) -> Result<Vec<String>, FeedError> {
        (**self).categories()
    }
}
