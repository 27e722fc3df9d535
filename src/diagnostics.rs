//! Collection of absorbed, non-fatal errors.
//!
//! Detection never aborts on unreadable files or malformed manifests; it
//! degrades to empty values instead. The messages describing what was skipped
//! are gathered here and only shown to the user in verbose mode.

use colored::Colorize;

/// Accumulates non-fatal error messages produced during an analysis run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    verbose: bool,
    messages: Vec<String>,
}

impl Diagnostics {
    /// Create an empty collection.
    ///
    /// When `verbose` is `false` messages are dropped on the floor, so callers
    /// never have to check the flag themselves.
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self {
            verbose,
            messages: Vec::new(),
        }
    }

    /// Record a message if verbose mode is enabled.
    pub fn record(&mut self, message: impl Into<String>) {
        if self.verbose {
            self.messages.push(message.into());
        }
    }

    /// Messages recorded so far, in the order they occurred.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Print every recorded message to stderr.
    pub fn print(&self) {
        for message in &self.messages {
            eprintln!("{}", message.red());
        }
    }
}
