use super::Error;

/// Error raised by the row cursor while reading the result set.
///
/// This wraps whatever the underlying driver reported:
/// - fetching the column list
/// - advancing to the next row (including a cursor closed from outside)
/// - reading a cell of the current row
#[derive(Debug)]
pub(super) struct CursorError {
    pub(super) inner: anyhow::Error,
}

impl std::error::Error for CursorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for CursorError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("cursor error: ")?;
        // Display the error and walk its source chain
        let mut chain = self.inner.chain().peekable();
        while let Some(err) = chain.next() {
            core::fmt::Display::fmt(err, f)?;
            if chain.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a cursor failure.
    ///
    /// Cursor implementations use this to hand driver errors back to the
    /// mapper, which propagates them without retrying.
    pub fn cursor(err: impl Into<anyhow::Error>) -> Error {
        Error::from(super::ErrorKind::Cursor(CursorError { inner: err.into() }))
    }

    /// Returns `true` if this error was raised by the cursor.
    pub fn is_cursor(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Cursor(_))
    }
}
