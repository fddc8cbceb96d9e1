//! Table name, column schema and row values of the file_events table.

use std::fmt;

/// Name under which the table is registered with the query engine.
pub const TABLE_NAME: &str = "file_events";

/// Type of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// UTF-8 text
    String,
    /// Signed 64-bit integer
    Integer,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::String => write!(f, "TEXT"),
            ColumnType::Integer => write!(f, "BIGINT"),
        }
    }
}

/// Ordered list of `(column name, column type)` pairs.
pub type Schema = [(&'static str, ColumnType)];

/// Columns of the file_events table, in row order.
pub const SCHEMA: &Schema = &[
    ("action", ColumnType::String),
    ("pid", ColumnType::Integer),
    ("path", ColumnType::String),
    ("auid", ColumnType::Integer),
    ("success", ColumnType::Integer),
    ("time", ColumnType::Integer),
    ("file_path", ColumnType::String),
    ("inode", ColumnType::String),
];

/// A single typed cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Text value
    String(String),
    /// Integer value
    Integer(i64),
}

impl Value {
    /// Returns the column type this value belongs to.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::String(_) => ColumnType::String,
            Value::Integer(_) => ColumnType::Integer,
        }
    }

    /// Returns the text, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Integer(_) => None,
        }
    }

    /// Returns the integer, if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::String(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

/// One row of the file_events table.
///
/// Values are stored in [`SCHEMA`] order. A row cannot be modified once
/// built.
///
/// # Example
///
/// ```
/// use file_events_table::{Row, Value};
///
/// let row = Row::new(
///     "open",
///     42,
///     "/usr/bin/cat",
///     1000,
///     true,
///     1_700_000_000,
///     "/etc/hosts",
///     "1311",
/// );
///
/// assert_eq!(row.get("pid"), Some(&Value::Integer(42)));
/// assert_eq!(row.get("success"), Some(&Value::Integer(1)));
/// assert_eq!(row.get("fd"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    /// Builds a row from its column values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        action: impl Into<String>,
        pid: i64,
        path: impl Into<String>,
        auid: i64,
        success: bool,
        time: i64,
        file_path: impl Into<String>,
        inode: impl Into<String>,
    ) -> Self {
        Self {
            values: vec![
                Value::String(action.into()),
                Value::Integer(pid),
                Value::String(path.into()),
                Value::Integer(auid),
                Value::Integer(i64::from(success)),
                Value::Integer(time),
                Value::String(file_path.into()),
                Value::String(inode.into()),
            ],
        }
    }

    /// Returns the value of the named column.
    pub fn get(&self, column: &str) -> Option<&Value> {
        SCHEMA
            .iter()
            .position(|(name, _)| *name == column)
            .and_then(|i| self.values.get(i))
    }

    /// Iterates over `(column name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        SCHEMA.iter().map(|(name, _)| *name).zip(self.values.iter())
    }

    /// Number of columns in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
