//! Translation of audit events into file_events rows.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Error, MissingRecord, RecordKind};
use crate::event::{AuditEvent, SyscallType};
use crate::schema::Row;

/// Returns the action string for syscalls the table reports, or `None`.
fn action_for(syscall_type: SyscallType) -> Option<&'static str> {
    match syscall_type {
        SyscallType::Open => Some("open"),
        SyscallType::OpenAt => Some("openat"),
        SyscallType::Create => Some("create"),
        _ => None,
    }
}

/// Current wall-clock time in whole seconds since the Unix epoch.
pub(crate) fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Builds the row for one audit event.
///
/// Returns `Ok(None)` for syscalls that are not file operations. The `time`
/// column is the moment of generation, not the time carried by the event.
///
/// # Errors
///
/// Returns [`Error::MissingRecord`] if a file-operation event lacks its
/// AUDIT_CWD or AUDIT_PATH record.
///
/// # Example
///
/// ```
/// use file_events_table::{generate_row, AuditEvent, SyscallRecordData, SyscallType};
///
/// let exit = AuditEvent::new(SyscallRecordData::new(SyscallType::Exit, 1, "/bin/true"));
/// assert_eq!(generate_row(&exit), Ok(None));
/// ```
pub fn generate_row(event: &AuditEvent) -> Result<Option<Row>, Error> {
    generate_row_at(event, current_timestamp())
}

/// Same as [`generate_row`], with the `time` column supplied by the caller.
pub fn generate_row_at(event: &AuditEvent, time: i64) -> Result<Option<Row>, Error> {
    let syscall = &event.syscall_data;

    let Some(action) = action_for(syscall.syscall_type) else {
        return Ok(None);
    };

    if event.cwd_data.is_none() {
        return Err(MissingRecord::new(RecordKind::Cwd, syscall.syscall_type).into());
    }

    let target = event
        .path_data
        .as_ref()
        .and_then(|paths| paths.first())
        .ok_or(MissingRecord::new(RecordKind::Path, syscall.syscall_type))?;

    Ok(Some(Row::new(
        action,
        syscall.process_id,
        syscall.exe.as_str(),
        syscall.auid,
        syscall.succeeded,
        time,
        target.path.as_str(),
        target.inode.as_str(),
    )))
}

/// Generates rows for a batch, keeping input order.
///
/// The batch is all-or-nothing: the first failing event aborts it and the
/// rows generated so far are discarded.
pub fn generate_rows(events: &[AuditEvent]) -> Result<Vec<Row>, Error> {
    let mut rows = Vec::with_capacity(events.len());

    for event in events {
        if let Some(row) = generate_row(event)? {
            rows.push(row);
        }
    }

    Ok(rows)
}
