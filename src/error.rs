use std::fmt;

use crate::event::SyscallType;

/// Errors that can occur in the file_events table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The table could not be constructed.
    Construction {
        /// Human-readable reason for the failure
        message: String,
    },
    /// A file-operation event arrived without a required companion record.
    MissingRecord(MissingRecord),
}

impl Error {
    /// Creates a construction error.
    pub fn construction(message: impl Into<String>) -> Self {
        Error::Construction {
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Construction { message } => {
                write!(f, "file_events: construction failed: {}", message)
            }
            Error::MissingRecord(m) => write!(f, "file_events: {}", m),
        }
    }
}

impl std::error::Error for Error {}

impl From<MissingRecord> for Error {
    fn from(m: MissingRecord) -> Self {
        Error::MissingRecord(m)
    }
}

/// A required companion record was absent from an audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingRecord {
    /// Which record was missing
    pub kind: RecordKind,
    /// The syscall of the event that lacked it
    pub syscall: SyscallType,
}

impl MissingRecord {
    /// Creates a new missing-record error.
    pub fn new(kind: RecordKind, syscall: SyscallType) -> Self {
        Self { kind, syscall }
    }
}

impl fmt::Display for MissingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "the {} record is missing from a {} event",
            self.kind, self.syscall
        )
    }
}

impl std::error::Error for MissingRecord {}

/// Companion records that file-operation events must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// The AUDIT_CWD record
    Cwd,
    /// The AUDIT_PATH records
    Path,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Cwd => write!(f, "AUDIT_CWD"),
            RecordKind::Path => write!(f, "AUDIT_PATH"),
        }
    }
}
