mod recording_error_log;
mod scripted_console;
mod stub_feeds;

pub use recording_error_log::RecordingErrorLog;
pub use scripted_console::{ConsoleEvent, ScriptedConsole};
pub use stub_feeds::{StubJokeFeed, StubNameFeed};
