use super::Error;

/// Error when the store rejects a request with an error envelope.
///
/// Carries the HTTP status and, when the body could be decoded, the
/// envelope's `error.type` and `error.reason`.
#[derive(Debug)]
pub(super) struct QueryFailed {
    status: u16,
    ty: Option<Box<str>>,
    reason: Option<Box<str>>,
}

impl std::error::Error for QueryFailed {}

impl core::fmt::Display for QueryFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "query failed: {}", self.status)?;
        if let Some(ty) = &self.ty {
            write!(f, ": {ty}")?;
        }
        if let Some(reason) = &self.reason {
            write!(f, ": {reason}")?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a query failed error from a store error envelope.
    pub fn query_failed(status: u16, ty: Option<&str>, reason: Option<&str>) -> Error {
        Error::from(super::ErrorKind::QueryFailed(QueryFailed {
            status,
            ty: ty.map(Into::into),
            reason: reason.map(Into::into),
        }))
    }

    /// Returns `true` if this error is a query failed error.
    pub fn is_query_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::QueryFailed(_))
    }
}
