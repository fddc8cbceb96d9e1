//! The `file_events` table: file open/create activity taken from the audit stream.
//!
//! This crate sits between an audit consumer and a query engine:
//! - **Generation**: each decoded audit event becomes zero or one row
//! - **Buffering**: rows wait in a bounded queue; overflow drops the oldest
//! - **Draining**: the query engine takes all queued rows at once
//!
//! # Core Types
//!
//! - [`AuditEvent`]: A decoded syscall with its optional companion records
//! - [`Row`]: One typed row laid out according to [`SCHEMA`]
//! - [`RowQueue`]: Mutex-guarded, drop-oldest row buffer
//! - [`FileEventsTable`]: The table, fed through [`AuditEventConsumer`] and
//!   read through [`VirtualTable`]
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use file_events_table::{
//!     AuditEvent, AuditEventConsumer, CwdRecordData, FileEventsTable, PathRecordData,
//!     StaticConfiguration, SyscallRecordData, SyscallType, TracingLogger, Value, VirtualTable,
//! };
//!
//! let table = FileEventsTable::create(
//!     &StaticConfiguration::default(),
//!     Arc::new(TracingLogger::new()),
//! )
//! .expect("table created");
//!
//! let creat = AuditEvent::new(
//!     SyscallRecordData::new(SyscallType::Create, 812, "/usr/bin/touch")
//!         .with_auid(1000)
//!         .with_succeeded(true),
//! )
//! .with_cwd(CwdRecordData { cwd: "/home/alice".to_string() })
//! .with_paths(vec![PathRecordData::new("/home/alice/notes.txt", "393222")]);
//!
//! table.process_events(&[creat]).expect("batch accepted");
//!
//! let rows = table.generate_row_list();
//! assert_eq!(rows[0].get("action"), Some(&Value::from("create")));
//! assert!(table.generate_row_list().is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod event;
mod generator;
mod logging;
mod queue;
mod schema;
mod table;

pub use config::{DEFAULT_MAX_QUEUED_ROW_COUNT, StaticConfiguration, TableConfiguration};
pub use error::{Error, MissingRecord, RecordKind};
pub use event::{
    AuditEvent, CwdRecordData, PathRecordData, SockaddrRecordData, SyscallRecordData,
    SyscallType,
};
pub use generator::{generate_row, generate_row_at, generate_rows};
pub use logging::{MemoryLogger, Severity, TableLogger, TracingLogger};
pub use queue::RowQueue;
pub use schema::{ColumnType, Row, SCHEMA, Schema, TABLE_NAME, Value};
pub use table::{AuditEventConsumer, FileEventsTable, VirtualTable};
