//! Activity log and status cell
//!
//! The activity log is the operator-facing record of everything the console
//! did: timestamped, append-only, never overwritten until an explicit clear.
//! The status cell is a single transient line flipped around each network
//! call. Both are cheap to clone and share their state, so detached action
//! tasks can write to them concurrently.

use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local};

/// Timestamp format used for rendered log lines
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Status cell text while no request is in flight
pub const STATUS_READY: &str = "Ready";

/// Status cell text while a request is in flight
pub const STATUS_BUSY: &str = "Sending request...";

/// One timestamped activity log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// When the entry was appended
    pub timestamp: DateTime<Local>,

    /// Operator-facing message
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.message
        )
    }
}

/// Append-only operator activity log
///
/// Entries are only ever appended; `clear` is the single explicit exception
/// and leaves a "log cleared" marker behind. With echo enabled every
/// appended entry is also rendered to stdout immediately, which is how the
/// interactive shell surfaces results from detached action tasks.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Arc<Mutex<Vec<LogEntry>>>,
    echo: bool,
}

impl ActivityLog {
    /// Create a silent log (entries are stored but not printed)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log that renders each appended entry to stdout
    pub fn echoing() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            echo: true,
        }
    }

    /// Append a timestamped entry
    pub fn append(&self, message: impl Into<String>) {
        let entry = LogEntry {
            timestamp: Local::now(),
            message: message.into(),
        };

        if self.echo {
            println!("{}", entry);
        }

        self.lock().push(entry);
    }

    /// Clear the log, leaving a marker entry
    pub fn clear(&self) {
        self.lock().clear();
        self.append("Log cleared");
    }

    /// Snapshot of all entries in append order
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    /// Snapshot of all entries rendered as display lines
    pub fn rendered_lines(&self) -> Vec<String> {
        self.lock().iter().map(|entry| entry.to_string()).collect()
    }

    /// Number of entries currently in the log
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Transient status line ("Ready" / "Sending request...")
#[derive(Debug, Clone)]
pub struct StatusCell {
    text: Arc<Mutex<String>>,
}

impl StatusCell {
    /// Create a status cell in the ready state
    pub fn new() -> Self {
        Self {
            text: Arc::new(Mutex::new(STATUS_READY.to_string())),
        }
    }

    /// Replace the status text
    pub fn set(&self, text: &str) {
        let mut guard = self.text.lock().unwrap_or_else(|e| e.into_inner());
        *guard = text.to_string();
    }

    /// Current status text
    pub fn get(&self) -> String {
        self.text.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Default for StatusCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_entries_are_appended_in_order() {
        let log = ActivityLog::new();
        log.append("first");
        log.append("second");
        log.append("third");

        let messages: Vec<String> = log.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);

        // Appending never rewrites earlier entries
        log.append("fourth");
        let messages: Vec<String> = log.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages[..3], ["first", "second", "third"]);
    }

    #[test]
    fn test_rendered_lines_are_timestamped() {
        let log = ActivityLog::new();
        log.append("hello");

        let line = log.rendered_lines().remove(0);
        assert!(line.starts_with('['));
        assert!(line.ends_with("] hello"));

        // The bracketed prefix is a fixed-width timestamp
        let stamp = &line[1..20];
        assert!(NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_clear_leaves_marker() {
        let log = ActivityLog::new();
        log.append("one");
        log.append("two");

        log.clear();

        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "Log cleared");
    }

    #[test]
    fn test_clones_share_entries() {
        let log = ActivityLog::new();
        let clone = log.clone();

        clone.append("from the clone");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_status_cell() {
        let status = StatusCell::new();
        assert_eq!(status.get(), STATUS_READY);

        status.set(STATUS_BUSY);
        assert_eq!(status.get(), STATUS_BUSY);

        status.set(STATUS_READY);
        assert_eq!(status.get(), STATUS_READY);
    }
}
