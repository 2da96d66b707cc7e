pub mod driver;
pub use driver::Driver;

mod error;
pub use error::{Error, IntoError};

pub mod mapping;
pub use mapping::CollectionMapping;

mod names;
pub use names::Names;

pub mod query;

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses Sturgeon's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
