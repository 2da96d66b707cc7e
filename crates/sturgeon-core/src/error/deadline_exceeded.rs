use super::Error;

/// Error when a caller-supplied deadline elapses before the store answers.
#[derive(Debug)]
pub(super) struct DeadlineExceeded {
    operation: Box<str>,
}

impl std::error::Error for DeadlineExceeded {}

impl core::fmt::Display for DeadlineExceeded {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "deadline exceeded: {}", self.operation)
    }
}

impl Error {
    /// Creates a deadline exceeded error for the named store operation.
    pub fn deadline_exceeded(operation: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DeadlineExceeded(DeadlineExceeded {
            operation: operation.into().into(),
        }))
    }

    /// Returns `true` if this error is a deadline exceeded error.
    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DeadlineExceeded(_))
    }
}
