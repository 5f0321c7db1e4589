pub mod categories;
pub mod cli;
pub mod config;
mod context;
pub mod jokes;
pub mod output;
pub mod prompt;
pub mod session;

pub use context::AppContext;
