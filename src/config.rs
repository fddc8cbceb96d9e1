//! Configuration consumed by the table at construction time.

/// Default capacity of the row queue.
pub const DEFAULT_MAX_QUEUED_ROW_COUNT: usize = 5000;

/// Source of the table's configuration.
///
/// The table reads each value once, in [`FileEventsTable::create`]; later
/// changes are not observed.
///
/// [`FileEventsTable::create`]: crate::FileEventsTable::create
pub trait TableConfiguration {
    /// Maximum number of rows buffered between two drains.
    fn max_queued_row_count(&self) -> usize;
}

/// Fixed, in-process configuration.
///
/// # Examples
///
/// ```
/// use file_events_table::{StaticConfiguration, TableConfiguration};
///
/// let config = StaticConfiguration::new(100);
/// assert_eq!(config.max_queued_row_count(), 100);
///
/// let config = StaticConfiguration::default();
/// assert_eq!(config.max_queued_row_count(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticConfiguration {
    max_queued_row_count: usize,
}

impl StaticConfiguration {
    /// Creates a configuration with the given queue capacity.
    pub fn new(max_queued_row_count: usize) -> Self {
        Self {
            max_queued_row_count,
        }
    }
}

impl Default for StaticConfiguration {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_QUEUED_ROW_COUNT)
    }
}

impl TableConfiguration for StaticConfiguration {
    fn max_queued_row_count(&self) -> usize {
        self.max_queued_row_count
    }
}

impl<T: TableConfiguration + ?Sized> TableConfiguration for &T {
    fn max_queued_row_count(&self) -> usize {
        (**self).max_queued_row_count()
    }
}
