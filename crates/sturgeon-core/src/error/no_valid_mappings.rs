use super::Error;

/// Error when schema assembly produced no root fields at all.
#[derive(Debug)]
pub(super) struct NoValidMappings;

impl std::error::Error for NoValidMappings {}

impl core::fmt::Display for NoValidMappings {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no valid mappings provided, no schemas were built")
    }
}

impl Error {
    /// Creates the fatal error raised when no collection yields usable fields.
    pub fn no_valid_mappings() -> Error {
        Error::from(super::ErrorKind::NoValidMappings(NoValidMappings))
    }

    /// Returns `true` if this error is a no valid mappings error.
    pub fn is_no_valid_mappings(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoValidMappings(_))
    }
}
