use crate::ExecLog;

use std::sync::{Arc, Mutex};
use sturgeon_core::{
    async_trait,
    driver::{Operation, Response},
    Driver, Result,
};

#[derive(Debug, Clone)]
pub struct DriverOp {
    pub operation: Operation,

    /// `None` when the operation failed
    pub response: Option<Response>,
}

/// A driver wrapper that records every operation for assertions
#[derive(Debug)]
pub struct RecordingDriver {
    /// The underlying driver that actually executes operations
    inner: Box<dyn Driver>,

    /// Log of all operations executed through this driver
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl RecordingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to the operations log
    pub fn exec_log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }
}

#[async_trait]
impl Driver for RecordingDriver {
    async fn exec(&self, operation: Operation) -> Result<Response> {
        let operation_clone = operation.clone();

        let response = self.inner.exec(operation).await;

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(DriverOp {
                operation: operation_clone,
                response: response.as_ref().ok().cloned(),
            });

        response
    }
}
