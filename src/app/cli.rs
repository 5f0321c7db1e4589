//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::app::config::{ConfigOverrides, load_config};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "jokegen")]
#[command(version)]
#[command(
    about = "Tell random Chuck Norris jokes, optionally by category and with a random name",
    long_about = None
)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Base URL of the joke API
    #[arg(long)]
    joke_api_url: Option<Url>,
    /// Base URL of the random name API
    #[arg(long)]
    name_api_url: Option<Url>,
    /// File receiving details of errors caught during the session
    #[arg(long)]
    error_log: Option<PathBuf>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        joke_api_url: cli.joke_api_url,
        name_api_url: cli.name_api_url,
        error_log: cli.error_log,
    };

    let result: Result<(), AppError> =
        load_config(cli.config.as_deref(), overrides).and_then(|config| crate::play(&config));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
