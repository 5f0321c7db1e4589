//! Configuration models loaded from an optional TOML file.

use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

/// Top-level jokegen configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// External feed settings.
    #[serde(default)]
    pub feeds: FeedsConfig,
    /// Interactive session settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Error log settings.
    #[serde(default)]
    pub error_log: ErrorLogConfig,
}

/// Endpoints and transport settings for the joke and name feeds.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedsConfig {
    /// Base URL of the joke API.
    #[serde(default = "default_joke_api_url")]
    pub joke_api_url: Url,
    /// Base URL of the random name API.
    #[serde(default = "default_name_api_url")]
    pub name_api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            joke_api_url: default_joke_api_url(),
            name_api_url: default_name_api_url(),
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Name replaced in each joke when the user asks for a random name.
    #[serde(default = "default_replace_name")]
    pub replace_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { replace_name: default_replace_name() }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorLogConfig {
    /// File receiving details of errors caught during a session.
    #[serde(default = "default_error_log_path")]
    pub path: PathBuf,
    /// Append to the file instead of replacing it on each error.
    #[serde(default)]
    pub append: bool,
}

impl Default for ErrorLogConfig {
    fn default() -> Self {
        Self { path: default_error_log_path(), append: false }
    }
}

pub const DEFAULT_JOKE_API_URL: &str = "https://api.chucknorris.io/";
pub const DEFAULT_NAME_API_URL: &str = "https://names.privserv.com/api/";
pub const DEFAULT_REPLACE_NAME: &str = "Chuck Norris";
pub const DEFAULT_ERROR_LOG: &str = "Error.log";

fn default_joke_api_url() -> Url {
    Url::parse(DEFAULT_JOKE_API_URL).expect("Default joke API URL must be valid")
}

fn default_name_api_url() -> Url {
    Url::parse(DEFAULT_NAME_API_URL).expect("Default name API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

fn default_replace_name() -> String {
    DEFAULT_REPLACE_NAME.to_string()
}

fn default_error_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_ERROR_LOG)
}

/// Ensure a base URL ends with `/` so endpoint paths join beneath it.
pub fn normalize_base_url(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
