mod response;
pub use response::{Hit, Response, SearchHits};

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::fmt::Debug;

/// A connection to the document store.
///
/// Drivers translate an [`Operation`] into the store's wire protocol and
/// decode the answer. They never retry; one operation is one round-trip.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Execute a store operation
    async fn exec(&self, op: Operation) -> crate::Result<Response>;
}

#[async_trait]
impl<T: Driver + ?Sized> Driver for std::sync::Arc<T> {
    async fn exec(&self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op).await
    }
}

#[async_trait]
impl<T: Driver + ?Sized> Driver for Box<T> {
    async fn exec(&self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op).await
    }
}
