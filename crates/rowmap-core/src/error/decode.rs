use super::Error;

/// Error when a non-NULL cell cannot be decoded into its destination field.
///
/// Used as context over the conversion error that caused it.
#[derive(Debug)]
pub(super) struct DecodeError {
    column: Box<str>,
    field: Box<str>,
}

impl std::error::Error for DecodeError {}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot decode column `{}` into field `{}`",
            self.column, self.field
        )
    }
}

impl Error {
    /// Creates a decode error for `column` bound to `field`.
    pub fn decode(column: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Decode(DecodeError {
            column: column.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is a decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Decode(_))
    }
}
