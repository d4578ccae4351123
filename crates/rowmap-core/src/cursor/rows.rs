use super::Cursor;
use crate::{stmt::Value, Error, Result};

use std::collections::VecDeque;

/// An in-memory result set.
///
/// Useful for drivers that buffer a whole result before handing it out, and
/// for tests. Cells of the current row can be read any number of times.
///
/// ```
/// use rowmap_core::{Cursor, Rows, stmt::Value};
///
/// let mut rows = Rows::new(["id", "username"])
///     .row([Value::from(1_i32), Value::from("name1")]);
///
/// assert!(rows.advance().unwrap());
/// assert_eq!(rows.value(1).unwrap(), Value::from("name1"));
/// assert!(!rows.advance().unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rows {
    columns: Vec<String>,
    pending: VecDeque<Vec<Value>>,
    current: Option<Vec<Value>>,
    closed: bool,
}

impl Rows {
    pub fn new<I>(columns: I) -> Rows
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Rows {
            columns: columns.into_iter().map(Into::into).collect(),
            ..Rows::default()
        }
    }

    /// Appends a row. Missing trailing cells read as `Null`.
    pub fn row<I>(mut self, values: I) -> Rows
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.push(values);
        self
    }

    /// Appends a row in place.
    pub fn push<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.pending
            .push_back(values.into_iter().map(Into::into).collect());
    }

    /// Number of rows not yet read.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Closes the cursor. Subsequent reads fail with a cursor error.
    pub fn close(&mut self) {
        self.closed = true;
        self.pending.clear();
        self.current = None;
    }
}

impl Cursor for Rows {
    fn columns(&self) -> Result<Vec<String>> {
        if self.closed {
            return Err(Error::cursor(anyhow::anyhow!("cursor is closed")));
        }

        Ok(self.columns.clone())
    }

    fn advance(&mut self) -> Result<bool> {
        if self.closed {
            return Err(Error::cursor(anyhow::anyhow!("cursor is closed")));
        }

        self.current = self.pending.pop_front();
        Ok(self.current.is_some())
    }

    fn value(&mut self, column: usize) -> Result<Value> {
        if column >= self.columns.len() {
            return Err(Error::cursor(anyhow::anyhow!(
                "column index {column} out of range for {} columns",
                self.columns.len()
            )));
        }

        let Some(row) = self.current.as_ref() else {
            return Err(Error::cursor(anyhow::anyhow!("no current row")));
        };

        Ok(row.get(column).cloned().unwrap_or_default())
    }
}
