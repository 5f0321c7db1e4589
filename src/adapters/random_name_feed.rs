//! Name feed backed by the random name API.

use serde::Deserialize;

use crate::adapters::JsonFeedClient;
use crate::domain::{FeedError, Name};
use crate::ports::NameFeed;

/// Payload returned by the random name API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NameResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

impl From<NameResponse> for Name {
    fn from(response: NameResponse) -> Self {
        Name { first: response.name, surname: response.surname }
    }
}

#[derive(Debug, Clone)]
pub struct RandomNameFeed {
    client: JsonFeedClient,
}

impl RandomNameFeed {
    pub fn new(client: JsonFeedClient) -> Self {
        Self { client }
    }

    pub fn random_name_response(&self) -> Result<NameResponse, FeedError> {
        self.client.get_json(self.client.base_url().clone())
    }
}

impl NameFeed for RandomNameFeed {
    fn random_full_name(&self) -> Result<String, FeedError> {
        let name: Name = self.random_name_response()?.into();
        Ok(name.full_name())
    }
}
