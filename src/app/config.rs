//! Configuration loading from an optional TOML file plus command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::AppConfig;
use crate::domain::AppError;
use crate::domain::config::normalize_base_url;

/// Values given on the command line, taking precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub joke_api_url: Option<Url>,
    pub name_api_url: Option<Url>,
    pub error_log: Option<PathBuf>,
}

/// Load the configuration from `path` (or defaults when absent) and apply `overrides`.
pub fn load_config(path: Option<&Path>, overrides: ConfigOverrides) -> Result<AppConfig, AppError> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => AppConfig::default(),
    };

    if let Some(url) = overrides.joke_api_url {
        config.feeds.joke_api_url = url;
    }
    if let Some(url) = overrides.name_api_url {
        config.feeds.name_api_url = url;
    }
    if let Some(path) = overrides.error_log {
        config.error_log.path = path;
    }

    if config.session.replace_name.trim().is_empty() {
        return Err(AppError::config_error("session.replace_name must not be blank"));
    }

    config.feeds.joke_api_url = normalize_base_url(config.feeds.joke_api_url);
    config.feeds.name_api_url = normalize_base_url(config.feeds.name_api_url);

    Ok(config)
}

fn read_config_file(path: &Path) -> Result<AppConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::config_error(format!("Config file not found: {}", path.display())));
    }

    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
