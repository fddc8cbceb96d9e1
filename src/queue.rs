//! Bounded, thread-safe row buffer.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::Error;
use crate::schema::Row;

/// Upper bound on the capacity reserved up front.
const INITIAL_QUEUE_CAPACITY: usize = 1024;

/// Rows waiting to be drained by the query engine.
///
/// Appends that push the queue past its capacity evict the oldest rows. All
/// mutation happens under a single lock, so batches are never interleaved.
///
/// # Example
///
/// ```
/// use file_events_table::{Row, RowQueue};
///
/// let queue = RowQueue::new(2).unwrap();
/// let row = |pid| Row::new("open", pid, "/bin/cat", 0, true, 0, "/etc/hosts", "1");
///
/// let dropped = queue.append_rows(vec![row(1), row(2), row(3)]);
/// assert_eq!(dropped, 1);
///
/// let rows = queue.drain_rows();
/// assert_eq!(rows, vec![row(2), row(3)]);
/// assert!(queue.is_empty());
/// ```
#[derive(Debug)]
pub struct RowQueue {
    rows: Mutex<VecDeque<Row>>,
    max_queued_row_count: usize,
}

impl RowQueue {
    /// Creates an empty queue holding at most `max_queued_row_count` rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`] if the initial buffer cannot be
    /// allocated.
    pub fn new(max_queued_row_count: usize) -> Result<Self, Error> {
        let mut rows = VecDeque::new();
        rows.try_reserve(max_queued_row_count.min(INITIAL_QUEUE_CAPACITY))
            .map_err(|e| Error::construction(format!("Memory allocation failure: {}", e)))?;

        Ok(Self {
            rows: Mutex::new(rows),
            max_queued_row_count,
        })
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Row>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends rows in order, then evicts from the front down to capacity.
    ///
    /// Returns the number of rows evicted.
    pub fn append_rows(&self, rows: Vec<Row>) -> usize {
        if rows.is_empty() {
            return 0;
        }

        let mut queue = self.lock();
        queue.extend(rows);

        let excess = queue.len().saturating_sub(self.max_queued_row_count);
        if excess > 0 {
            queue.drain(..excess);
        }
        excess
    }

    /// Takes every queued row, leaving the queue empty.
    pub fn drain_rows(&self) -> Vec<Row> {
        let taken = std::mem::take(&mut *self.lock());
        Vec::from(taken)
    }

    /// Number of rows currently queued.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no rows are queued.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Capacity fixed at construction.
    pub fn max_queued_row_count(&self) -> usize {
        self.max_queued_row_count
    }
}
