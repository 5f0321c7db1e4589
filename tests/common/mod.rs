//! Shared testing utilities for jokegen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const WELCOME: &str = "Welcome to Joke Company's Chuck Norris Joke Generator.";
pub const FAREWELL: &str = "Thanks for playing Chuck Norris Joke Generator.";
pub const APOLOGY: &str =
    "Sorry, an error occurred. If this continues, please contact Joke Company support.";

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Directory the binary runs in; the default error log lands here.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `jokegen` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("jokegen").expect("Failed to locate jokegen binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Build a command pointed at the given feed servers.
    pub fn cli_with_feeds(&self, joke_api_url: &str, name_api_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.args(["--joke-api-url", joke_api_url, "--name-api-url", name_api_url]);
        cmd
    }

    /// Write a config file into the temp root and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("jokegen.toml");
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    pub fn error_log(&self) -> PathBuf {
        self.work_dir.join("Error.log")
    }

    pub fn read_error_log(&self) -> String {
        fs::read_to_string(self.error_log()).expect("Error.log should exist")
    }
}
