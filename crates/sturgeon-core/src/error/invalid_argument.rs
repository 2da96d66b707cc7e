use super::Error;

/// Error when a resolver argument is missing or has the wrong shape.
///
/// Only the operation that received the argument fails; sibling fields in
/// the same request still resolve.
#[derive(Debug)]
pub(super) struct InvalidArgument {
    name: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidArgument {}

impl core::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid argument `{}`: {}", self.name, self.message)
    }
}

impl Error {
    /// Creates an invalid argument error for the named argument.
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidArgument(InvalidArgument {
            name: name.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidArgument(_))
    }
}
