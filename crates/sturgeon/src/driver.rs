mod logging;
pub use logging::LoggingDriver;

pub use sturgeon_core::driver::{
    operation::{self, Operation},
    Driver, Hit, Response, SearchHits,
};
