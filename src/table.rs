use std::sync::Arc;

use crate::config::TableConfiguration;
use crate::error::Error;
use crate::event::AuditEvent;
use crate::generator::generate_rows;
use crate::logging::{Severity, TableLogger};
use crate::queue::RowQueue;
use crate::schema::{Row, Schema, SCHEMA, TABLE_NAME};

/// A table the host query engine can materialize.
pub trait VirtualTable {
    /// Name the table is registered under.
    fn name(&self) -> &'static str;

    /// Ordered column list.
    fn schema(&self) -> &'static Schema;

    /// Returns the table's current contents.
    ///
    /// For event tables this hands the buffered rows over to the caller;
    /// the next call only sees rows generated afterwards.
    fn generate_row_list(&self) -> Vec<Row>;
}

/// Receives batches of decoded audit events.
pub trait AuditEventConsumer {
    /// Processes one batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch was rejected. A rejected batch leaves no
    /// trace in the consumer.
    fn process_events(&self, events: &[AuditEvent]) -> Result<(), Error>;
}

/// The file_events table.
///
/// Turns open/openat/creat audit events into rows and keeps them in a
/// bounded queue until the query engine asks for them. Producers and the
/// consumer may run on different threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use file_events_table::{
///     AuditEvent, AuditEventConsumer, CwdRecordData, FileEventsTable, MemoryLogger,
///     PathRecordData, StaticConfiguration, SyscallRecordData, SyscallType, VirtualTable,
/// };
///
/// let logger = Arc::new(MemoryLogger::new());
/// let table = FileEventsTable::create(&StaticConfiguration::new(100), logger).unwrap();
///
/// let event = AuditEvent::new(
///     SyscallRecordData::new(SyscallType::OpenAt, 42, "/usr/bin/less").with_succeeded(true),
/// )
/// .with_cwd(CwdRecordData { cwd: "/root".to_string() })
/// .with_paths(vec![PathRecordData::new("/etc/passwd", "1234")]);
///
/// table.process_events(&[event]).unwrap();
///
/// let rows = table.generate_row_list();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(table.name(), "file_events");
/// ```
pub struct FileEventsTable {
    logger: Arc<dyn TableLogger>,
    queue: RowQueue,
}

impl std::fmt::Debug for FileEventsTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileEventsTable")
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}

impl FileEventsTable {
    /// Creates the table, reading its configuration once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`] if the row buffer cannot be allocated.
    pub fn create(
        configuration: &dyn TableConfiguration,
        logger: Arc<dyn TableLogger>,
    ) -> Result<Self, Error> {
        let max_queued_row_count = configuration.max_queued_row_count();
        let queue = RowQueue::new(max_queued_row_count)?;

        tracing::debug!(
            target: "file_events",
            max_queued_row_count,
            "table created"
        );

        Ok(Self { logger, queue })
    }

    /// Queue capacity read from the configuration.
    pub fn max_queued_row_count(&self) -> usize {
        self.queue.max_queued_row_count()
    }

    /// Number of rows waiting to be drained.
    pub fn queued_row_count(&self) -> usize {
        self.queue.len()
    }
}

impl AuditEventConsumer for FileEventsTable {
    fn process_events(&self, events: &[AuditEvent]) -> Result<(), Error> {
        let rows = generate_rows(events).map_err(|err| {
            tracing::debug!(
                target: "file_events",
                events = events.len(),
                error = %err,
                "batch rejected"
            );
            err
        })?;

        let dropped = self.queue.append_rows(rows);
        if dropped > 0 {
            self.logger.log_message(
                Severity::Warning,
                &format!(
                    "file_events: Dropping {} rows (max row count is set to {})",
                    dropped,
                    self.queue.max_queued_row_count()
                ),
            );
        }

        Ok(())
    }
}

impl VirtualTable for FileEventsTable {
    fn name(&self) -> &'static str {
        TABLE_NAME
    }

    fn schema(&self) -> &'static Schema {
        SCHEMA
    }

    fn generate_row_list(&self) -> Vec<Row> {
        let rows = self.queue.drain_rows();
        tracing::debug!(target: "file_events", rows = rows.len(), "rows drained");
        rows
    }
}
