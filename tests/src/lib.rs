mod exec_log;
pub use exec_log::ExecLog;

pub mod fixtures;

mod memory_driver;
pub use memory_driver::MemoryDriver;

mod recording_driver;
pub use recording_driver::{DriverOp, RecordingDriver};

use sturgeon::{Config, Sturgeon};
use sturgeon_core::schema::SelectionSet;

/// Builds a handle over `driver`, discovering collections through it.
pub async fn setup(driver: MemoryDriver, config: Config) -> (Sturgeon, ExecLog) {
    let driver = RecordingDriver::new(Box::new(driver));
    let log = driver.exec_log();

    let db = Sturgeon::builder()
        .config(config)
        .build(driver)
        .await
        .unwrap();

    (db, log)
}

/// Shorthand for a flat selection.
pub fn select<const N: usize>(names: [&str; N]) -> SelectionSet {
    SelectionSet::leaves(names)
}
