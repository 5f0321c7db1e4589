use std::cell::{Cell, RefCell};

use crate::domain::FeedError;
use crate::ports::{JokeFeed, NameFeed};

fn stub_failure(what: &str) -> FeedError {
    FeedError::Response { uri: format!("stub://{}", what), details: "stub failure".to_string() }
}

/// Joke feed returning fixed text and counting calls.
#[derive(Debug, Default)]
pub struct StubJokeFeed {
    joke: String,
    categories: Vec<String>,
    fail_on_call: Option<usize>,
    category_failures: Cell<usize>,
    requested: RefCell<Vec<Option<String>>>,
    category_calls: Cell<usize>,
}

impl StubJokeFeed {
    pub fn new(joke: impl Into<String>) -> Self {
        Self { joke: joke.into(), ..Self::default() }
    }

    pub fn with_categories<S: Into<String>>(mut self, categories: impl IntoIterator<Item = S>) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Fail the `call`-th joke request (1-based).
    pub fn failing_on_call(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    /// Fail the next `times` category requests.
    pub fn failing_categories(self, times: usize) -> Self {
        self.category_failures.set(times);
        self
    }

    pub fn joke_calls(&self) -> usize {
        self.requested.borrow().len()
    }

    pub fn requested_categories(&self) -> Vec<Option<String>> {
        self.requested.borrow().clone()
    }

    pub fn category_calls(&self) -> usize {
        self.category_calls.get()
    }
}

impl JokeFeed for StubJokeFeed {
    fn random_joke(&self, category: Option<&str>) -> Result<String, FeedError> {
        self.requested.borrow_mut().push(category.map(str::to_string));
        if self.fail_on_call == Some(self.joke_calls()) {
            return Err(stub_failure("jokes/random"));
        }
        Ok(self.joke.clone())
    }

    fn categories(&self) -> Result<Vec<String>, FeedError> {
        self.category_calls.set(self.category_calls.get() + 1);
        let failures = self.category_failures.get();
        if failures > 0 {
            self.category_failures.set(failures - 1);
            return Err(stub_failure("jokes/categories"));
        }
        Ok(self.categories.clone())
    }
}

/// Name feed returning a fixed full name and counting calls.
#[derive(Debug, Default)]
pub struct StubNameFeed {
    name: String,
    fail: bool,
    calls: Cell<usize>,
}

impl StubNameFeed {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl NameFeed for StubNameFeed {
    fn random_full_name(&self) -> Result<String, FeedError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(stub_failure("names"));
        }
        Ok(self.name.clone())
    }
}
