//! The row cursor consumed by the mapper.

mod rows;
pub use rows::Rows;

use crate::{stmt::Value, Result};

/// A forward-only, single-pass handle over a tabular result set.
///
/// Implementations wrap a driver's result object. Failures are reported with
/// [`Error::cursor`](crate::Error::cursor) and are propagated unchanged by the
/// mapper. A cursor closed from outside while a mapping is in progress should
/// report an error from the next [`advance`](Cursor::advance).
pub trait Cursor {
    /// Returns the column names of the result, in cursor order.
    fn columns(&self) -> Result<Vec<String>>;

    /// Moves to the next row.
    ///
    /// Returns `Ok(true)` when a row is available and `Ok(false)` once the
    /// result set is exhausted.
    fn advance(&mut self) -> Result<bool>;

    /// Decodes the cell at position `column` of the current row.
    ///
    /// Only called after [`advance`](Cursor::advance) returned `Ok(true)`.
    fn value(&mut self, column: usize) -> Result<Value>;
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    fn columns(&self) -> Result<Vec<String>> {
        (**self).columns()
    }

    fn advance(&mut self) -> Result<bool> {
        (**self).advance()
    }

    fn value(&mut self, column: usize) -> Result<Value> {
        (**self).value(column)
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    fn columns(&self) -> Result<Vec<String>> {
        (**self).columns()
    }

    fn advance(&mut self) -> Result<bool> {
        (**self).advance()
    }

    fn value(&mut self, column: usize) -> Result<Value> {
        (**self).value(column)
    }
}
