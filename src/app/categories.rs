//! Process-scoped cache of joke categories.

use once_cell::unsync::OnceCell;

use crate::domain::AppError;
use crate::ports::JokeFeed;

/// Categories fetched from the joke feed at most once per run.
///
/// A failed fetch leaves the cache empty so the next request tries again.
#[derive(Debug, Default)]
pub struct CategoryCache {
    categories: OnceCell<Vec<String>>,
}

impl CategoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached categories, fetching them through `feed` on first use.
    pub fn get_or_fetch<J: JokeFeed>(&self, feed: &J) -> Result<&[String], AppError> {
        let categories = self.categories.get_or_try_init(|| feed.categories())?;
        Ok(categories.as_slice())
    }

    pub fn is_loaded(&self) -> bool {
        self.categories.get().is_some()
    }
}
