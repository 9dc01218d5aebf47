//! Append-only message log.
//!
//! Every narrative line the engine produces lands here in order. The log
//! never feeds back into game state; it exists for the frontend and for
//! session transcripts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged narrative line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The narrative text.
    pub text: String,
    /// When the line was appended.
    pub timestamp: DateTime<Utc>,
}

/// A chronological log of narrative lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageLog {
    entries: Vec<LogEntry>,
}

impl MessageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a narrative line.
    pub fn append(&mut self, text: impl Into<String>) {
        self.entries.push(LogEntry {
            text: text.into(),
            timestamp: Utc::now(),
        });
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries appended at or after the given index.
    ///
    /// Callers note the length before an action and use this to collect the
    /// lines that action produced.
    pub fn entries_since(&self, index: usize) -> &[LogEntry] {
        self.entries.get(index..).unwrap_or(&[])
    }

    /// The most recent `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the log as plain text, one timestamped line per entry.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Mission Log\n===========\n\n");
        for entry in &self.entries {
            out.push_str(&format!(
                "[{}] {}\n",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                entry.text
            ));
        }
        out
    }
}
