use super::Error;

/// Error when a result column has no counterpart in the destination record.
#[derive(Debug)]
pub(super) struct UnmatchedColumnError {
    column: Box<str>,
}

impl std::error::Error for UnmatchedColumnError {}

impl core::fmt::Display for UnmatchedColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column `{}` has no matching field in the destination record",
            self.column
        )
    }
}

impl Error {
    /// Creates an unmatched column error for `column`.
    pub fn unmatched_column(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnmatchedColumn(UnmatchedColumnError {
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is an unmatched column error.
    pub fn is_unmatched_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnmatchedColumn(_))
    }
}
