mod config;
pub use config::Config;

pub mod db;
pub use db::{FieldRequest, Sturgeon};

pub mod driver;

mod engine;
pub use engine::args::{BooleanQueryArg, RangeArg, TermLevelArg};

mod resolve;

pub mod schema;

pub use sturgeon_core::{bail, err, Error, Names, Result, Schema};
