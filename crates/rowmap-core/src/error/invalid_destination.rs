use super::Error;

/// Error when the destination cannot receive rows.
///
/// This is a programming error (for example a hand-written record whose
/// descriptor table is inconsistent) and is reported before any row is read.
#[derive(Debug)]
pub(super) struct InvalidDestinationError {
    message: Box<str>,
}

impl std::error::Error for InvalidDestinationError {}

impl core::fmt::Display for InvalidDestinationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid destination: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid destination error.
    pub fn invalid_destination(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDestination(
            InvalidDestinationError {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid destination error.
    pub fn is_invalid_destination(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidDestination(_))
    }
}
