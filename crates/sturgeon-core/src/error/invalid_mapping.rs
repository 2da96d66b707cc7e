use super::Error;

/// Error when a collection's metadata has no usable field list.
///
/// The schema assembler logs this and skips the collection; it is never
/// fatal on its own.
#[derive(Debug)]
pub(super) struct InvalidMapping {
    collection: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidMapping {}

impl core::fmt::Display for InvalidMapping {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid mapping for `{}`: {}",
            self.collection, self.message
        )
    }
}

impl Error {
    /// Creates an invalid mapping error for the named collection.
    pub fn invalid_mapping(collection: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidMapping(InvalidMapping {
            collection: collection.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid mapping error.
    pub fn is_invalid_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidMapping(_))
    }
}
