//! Joke assembly from the joke and name feeds.

use std::iter::FusedIterator;

use crate::domain::AppError;
use crate::ports::{JokeFeed, NameFeed};

/// Combines a joke feed and a name feed into personalised jokes.
pub struct JokeService<J, N> {
    joke_feed: J,
    name_feed: N,
}

impl<J: JokeFeed, N: NameFeed> JokeService<J, N> {
    pub fn new(joke_feed: J, name_feed: N) -> Self {
        Self { joke_feed, name_feed }
    }

    pub fn joke_feed(&self) -> &J {
        &self.joke_feed
    }

    /// Lazily fetch `count` jokes, optionally from `category`.
    ///
    /// With `name_to_replace`, one random full name is fetched when the first
    /// item is pulled (even for a count of zero) and replaces every exact
    /// occurrence of `name_to_replace` in each joke. An empty `name_to_replace`
    /// leaves jokes unchanged and fetches no name.
    ///
    /// Nothing is fetched until the sequence is pulled. A feed failure is
    /// yielded as an item and ends the sequence.
    pub fn random_jokes<'a>(
        &'a self,
        count: usize,
        category: Option<&'a str>,
        name_to_replace: Option<&'a str>,
    ) -> RandomJokes<'a, J, N> {
        let replacement = match name_to_replace {
            Some(name) if !name.is_empty() => Replacement::Pending(name),
            _ => Replacement::Keep,
        };

        RandomJokes { service: self, remaining: count, category, replacement, finished: false }
    }
}

enum Replacement<'a> {
    Keep,
    Pending(&'a str),
    Ready { from: &'a str, to: String },
}

/// Forward-only sequence returned by [`JokeService::random_jokes`].
pub struct RandomJokes<'a, J, N> {
    service: &'a JokeService<J, N>,
    remaining: usize,
    category: Option<&'a str>,
    replacement: Replacement<'a>,
    finished: bool,
}

impl<J: JokeFeed, N: NameFeed> RandomJokes<'_, J, N> {
    fn fail(&mut self, error: impl Into<AppError>) -> Option<Result<String, AppError>> {
        self.finished = true;
        Some(Err(error.into()))
    }
}

impl<J: JokeFeed, N: NameFeed> Iterator for RandomJokes<'_, J, N> {
    type Item = Result<String, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if let Replacement::Pending(from) = self.replacement {
            match self.service.name_feed.random_full_name() {
                Ok(to) => self.replacement = Replacement::Ready { from, to },
                Err(e) => return self.fail(e),
            }
        }

        if self.remaining == 0 {
            self.finished = true;
            return None;
        }
        self.remaining -= 1;

        let joke = match self.service.joke_feed.random_joke(self.category) {
            Ok(joke) => joke,
            Err(e) => return self.fail(e),
        };

        Some(Ok(match &self.replacement {
            Replacement::Ready { from, to } => joke.replace(*from, to),
            Replacement::Keep | Replacement::Pending(_) => joke,
        }))
    }
}

impl<J: JokeFeed, N: NameFeed> FusedIterator for RandomJokes<'_, J, N> {}
