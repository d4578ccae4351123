use super::Error;

/// Error when the cursor produced no rows at all.
///
/// This is the one error expected during normal operation; callers test for
/// it with [`Error::is_empty_result`].
#[derive(Debug)]
pub(super) struct EmptyResultError;

impl std::error::Error for EmptyResultError {}

impl core::fmt::Display for EmptyResultError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no rows in result set")
    }
}

impl Error {
    /// Creates an empty result error.
    pub fn empty_result() -> Error {
        Error::from(super::ErrorKind::EmptyResult(EmptyResultError))
    }

    /// Returns `true` if the result set contained no rows.
    pub fn is_empty_result(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmptyResult(_))
    }
}
