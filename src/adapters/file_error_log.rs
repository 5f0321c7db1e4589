//! Error log written to a local file.

use std::error::Error as StdError;
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::domain::{AppError, ErrorLogConfig};
use crate::ports::ErrorLog;

/// Writes caught errors to a file, replacing its content unless `append` is set.
#[derive(Debug, Clone)]
pub struct FileErrorLog {
    path: PathBuf,
    append: bool,
}

impl FileErrorLog {
    pub fn new(path: impl Into<PathBuf>, append: bool) -> Self {
        Self { path: path.into(), append }
    }

    pub fn from_config(config: &ErrorLogConfig) -> Self {
        Self::new(config.path.clone(), config.append)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_entry(&self, entry: &str) -> std::io::Result<()> {
        let mut options = OpenOptions::new();
        options.create(true);
        if self.append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        let mut file = options.open(&self.path)?;
        file.write_all(entry.as_bytes())
    }
}

impl ErrorLog for FileErrorLog {
    fn record(&mut self, error: &AppError) {
        let entry = format_entry(error);
        if let Err(e) = self.write_entry(&entry) {
            eprintln!("Failed to write error log {}: {}", self.path.display(), e);
        }
    }
}

/// Timestamp, message, source chain and debug form of `error`.
pub fn format_entry(error: &AppError) -> String {
    let mut entry = format!("[{}] {}\n", Utc::now().to_rfc3339(), error);

    let mut source = error.source();
    while let Some(inner) = source {
        let _ = writeln!(entry, "  caused by: {}", inner);
        source = inner.source();
    }

    let _ = writeln!(entry, "{:#?}", error);
    entry
}
