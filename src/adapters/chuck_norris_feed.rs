//! Joke feed backed by the chucknorris.io API.

use serde::Deserialize;

use crate::adapters::JsonFeedClient;
use crate::domain::FeedError;
use crate::ports::JokeFeed;

pub const RANDOM_JOKE_ENDPOINT: &str = "jokes/random";
pub const CATEGORIES_ENDPOINT: &str = "jokes/categories";
const CATEGORY_PARAM: &str = "category";

/// Full joke payload returned by `jokes/random`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RandomJokeResponse {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// The joke text.
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct ChuckNorrisFeed {
    client: JsonFeedClient,
}

impl ChuckNorrisFeed {
    pub fn new(client: JsonFeedClient) -> Self {
        Self { client }
    }

    /// Fetch a random joke with every field the API reports.
    pub fn random_joke_response(
        &self,
        category: Option<&str>,
    ) -> Result<RandomJokeResponse, FeedError> {
        let mut url = self.client.endpoint(RANDOM_JOKE_ENDPOINT)?;
        if let Some(category) = category {
            url.query_pairs_mut().append_pair(CATEGORY_PARAM, category);
        }

        self.client.get_json(url)
    }
}

impl JokeFeed for ChuckNorrisFeed {
    fn random_joke(&self, category: Option<&str>) -> Result<String, FeedError> {
        Ok(self.random_joke_response(category)?.value)
    }

    fn categories(&self) -> Result<Vec<String>, FeedError> {
        let url = self.client.endpoint(CATEGORIES_ENDPOINT)?;
        self.client.get_json(url)
    }
}
