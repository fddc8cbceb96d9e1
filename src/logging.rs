use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Severity of a message sent to a [`TableLogger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Diagnostic detail
    Debug,
    /// Normal operation
    Information,
    /// Something was lost or degraded, operation continues
    Warning,
    /// Operation failed
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Debug => write!(f, "debug"),
            Severity::Information => write!(f, "information"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Logging sink provided by the host.
///
/// Implementations must be callable from any producer thread.
pub trait TableLogger: Send + Sync {
    /// Logs a message at the given severity.
    fn log_message(&self, severity: Severity, message: &str);
}

/// A [`TableLogger`] that forwards to `tracing`.
///
/// Messages are emitted under the `file_events` target so they can be
/// filtered independently of the host's own events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Creates a new tracing-backed logger.
    pub fn new() -> Self {
        Self
    }
}

impl TableLogger for TracingLogger {
    fn log_message(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => tracing::debug!(target: "file_events", "{}", message),
            Severity::Information => tracing::info!(target: "file_events", "{}", message),
            Severity::Warning => tracing::warn!(target: "file_events", "{}", message),
            Severity::Error => tracing::error!(target: "file_events", "{}", message),
        }
    }
}

/// A [`TableLogger`] that keeps messages in memory.
///
/// Useful when the host wants to inspect or forward messages itself.
///
/// # Example
///
/// ```
/// use file_events_table::{MemoryLogger, Severity, TableLogger};
///
/// let logger = MemoryLogger::new();
/// logger.log_message(Severity::Warning, "file_events: Dropping 2 rows");
///
/// assert_eq!(logger.len(), 1);
/// assert_eq!(logger.messages()[0].0, Severity::Warning);
/// ```
#[derive(Debug, Default)]
pub struct MemoryLogger {
    messages: Mutex<Vec<(Severity, String)>>,
}

impl MemoryLogger {
    /// Creates an empty logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded messages, oldest first.
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the recorded messages at the given severity.
    pub fn messages_at(&self, severity: Severity) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Returns the number of recorded messages.
    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets all recorded messages.
    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl TableLogger for MemoryLogger {
    fn log_message(&self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((severity, message.to_string()));
    }
}
