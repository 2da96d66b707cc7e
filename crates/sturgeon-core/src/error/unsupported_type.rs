use super::Error;

/// Error when a store field type has no scalar counterpart in the typed
/// query protocol.
///
/// The compiler excludes such fields from generated types; the error only
/// surfaces to callers that ask for the mapping directly.
#[derive(Debug)]
pub(super) struct UnsupportedType {
    kind: Box<str>,
}

impl std::error::Error for UnsupportedType {}

impl core::fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no scalar type {}", self.kind)
    }
}

impl Error {
    /// Creates an unsupported type error for the given store type name.
    pub fn unsupported_type(kind: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedType {
            kind: kind.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedType(_))
    }
}
