//! Decoded audit events as delivered by the audit consumer.
//!
//! These types are produced by the audit decoding pipeline; the table only
//! reads them. Companion records are optional because the kernel does not
//! attach them to every syscall.

use std::fmt;

/// Syscalls the audit decoder can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyscallType {
    /// open(2)
    Open,
    /// openat(2)
    OpenAt,
    /// creat(2)
    Create,
    /// execve(2)
    Execve,
    /// exit(2)
    Exit,
    /// exit_group(2)
    ExitGroup,
    /// fork(2)
    Fork,
    /// vfork(2)
    VFork,
    /// clone(2)
    Clone,
    /// bind(2)
    Bind,
    /// connect(2)
    Connect,
}

impl fmt::Display for SyscallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyscallType::Open => write!(f, "open"),
            SyscallType::OpenAt => write!(f, "openat"),
            SyscallType::Create => write!(f, "creat"),
            SyscallType::Execve => write!(f, "execve"),
            SyscallType::Exit => write!(f, "exit"),
            SyscallType::ExitGroup => write!(f, "exit_group"),
            SyscallType::Fork => write!(f, "fork"),
            SyscallType::VFork => write!(f, "vfork"),
            SyscallType::Clone => write!(f, "clone"),
            SyscallType::Bind => write!(f, "bind"),
            SyscallType::Connect => write!(f, "connect"),
        }
    }
}

/// Fields of the AUDIT_SYSCALL record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyscallRecordData {
    /// Which syscall was observed
    pub syscall_type: SyscallType,
    /// Process id of the caller
    pub process_id: i64,
    /// Parent process id of the caller
    pub parent_process_id: i64,
    /// Path of the calling executable
    pub exe: String,
    /// Audit (login) user id
    pub auid: i64,
    /// Real user id
    pub uid: i64,
    /// Real group id
    pub gid: i64,
    /// Whether the syscall returned successfully
    pub succeeded: bool,
    /// First raw argument, hex encoded
    pub a0: String,
    /// Second raw argument, hex encoded
    pub a1: String,
    /// Third raw argument, hex encoded
    pub a2: String,
    /// Fourth raw argument, hex encoded
    pub a3: String,
}

impl SyscallRecordData {
    /// Creates a syscall record with the given type and caller identity.
    ///
    /// Remaining fields start empty or zeroed.
    pub fn new(syscall_type: SyscallType, process_id: i64, exe: impl Into<String>) -> Self {
        Self {
            syscall_type,
            process_id,
            parent_process_id: 0,
            exe: exe.into(),
            auid: 0,
            uid: 0,
            gid: 0,
            succeeded: false,
            a0: String::new(),
            a1: String::new(),
            a2: String::new(),
            a3: String::new(),
        }
    }

    /// Sets the audit user id.
    pub fn with_auid(mut self, auid: i64) -> Self {
        self.auid = auid;
        self
    }

    /// Sets the success flag.
    pub fn with_succeeded(mut self, succeeded: bool) -> Self {
        self.succeeded = succeeded;
        self
    }
}

/// The AUDIT_CWD record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CwdRecordData {
    /// Working directory of the process at syscall time
    pub cwd: String,
}

/// One AUDIT_PATH record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRecordData {
    /// Resolved path
    pub path: String,
    /// Inode identifier as reported by the kernel
    pub inode: String,
}

impl PathRecordData {
    /// Creates a path record.
    pub fn new(path: impl Into<String>, inode: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            inode: inode.into(),
        }
    }
}

/// The AUDIT_SOCKADDR record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SockaddrRecordData {
    /// Address family, e.g. `inet` or `inet6`
    pub family: String,
    /// Remote or local address
    pub address: String,
    /// Port number
    pub port: u16,
}

/// A decoded audit event: the syscall record plus its optional companions.
///
/// # Example
///
/// ```
/// use file_events_table::{AuditEvent, CwdRecordData, PathRecordData, SyscallRecordData, SyscallType};
///
/// let event = AuditEvent::new(SyscallRecordData::new(SyscallType::Open, 42, "/usr/bin/cat"))
///     .with_cwd(CwdRecordData { cwd: "/home/alice".to_string() })
///     .with_paths(vec![PathRecordData::new("/etc/hosts", "1311")]);
///
/// assert!(event.cwd_data.is_some());
/// assert_eq!(event.path_data.as_ref().map(Vec::len), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The AUDIT_SYSCALL record
    pub syscall_data: SyscallRecordData,
    /// The AUDIT_CWD record, if any
    pub cwd_data: Option<CwdRecordData>,
    /// The AUDIT_PATH records, most specific first
    pub path_data: Option<Vec<PathRecordData>>,
    /// The AUDIT_SOCKADDR record, if any
    pub sockaddr_data: Option<SockaddrRecordData>,
}

impl AuditEvent {
    /// Creates an event with no companion records.
    pub fn new(syscall_data: SyscallRecordData) -> Self {
        Self {
            syscall_data,
            cwd_data: None,
            path_data: None,
            sockaddr_data: None,
        }
    }

    /// Attaches the AUDIT_CWD record.
    pub fn with_cwd(mut self, cwd: CwdRecordData) -> Self {
        self.cwd_data = Some(cwd);
        self
    }

    /// Attaches the AUDIT_PATH records.
    pub fn with_paths(mut self, paths: Vec<PathRecordData>) -> Self {
        self.path_data = Some(paths);
        self
    }

    /// Attaches the AUDIT_SOCKADDR record.
    pub fn with_sockaddr(mut self, sockaddr: SockaddrRecordData) -> Self {
        self.sockaddr_data = Some(sockaddr);
        self
    }

    /// Returns the syscall type of this event.
    pub fn syscall_type(&self) -> SyscallType {
        self.syscall_data.syscall_type
    }
}
