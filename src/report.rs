//! User-visible progress messages.
//!
//! Directive handlers never print directly. They talk to a [`Reporter`],
//! which the CLI backs with colored terminal output and tests back with an
//! in-memory recording.

use crate::ui;

/// Severity of a reported message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// Sink for progress and failure messages.
pub trait Reporter {
    fn report(&self, level: Level, msg: &str);

    fn info(&self, msg: &str) {
        self.report(Level::Info, msg);
    }

    fn warning(&self, msg: &str) {
        self.report(Level::Warning, msg);
    }

    fn error(&self, msg: &str) {
        self.report(Level::Error, msg);
    }
}

/// Reporter that prints to the terminal.
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    /// With `quiet`, only warnings and errors are printed.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, level: Level, msg: &str) {
        match level {
            Level::Info if self.quiet => log::info!("{msg}"),
            Level::Info => ui::info(msg),
            Level::Warning => ui::warn(msg),
            Level::Error => ui::error(msg),
        }
    }
}

#[cfg(test)]
pub use recording::RecordingReporter;
