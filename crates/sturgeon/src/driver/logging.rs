use super::{Driver, Operation, Response};
use crate::Result;

use sturgeon_core::async_trait;

/// Wraps a driver and logs the traffic that passes through it.
#[derive(Debug)]
pub struct LoggingDriver<D> {
    inner: D,

    /// Log every operation's native request body
    log_queries: bool,

    /// Log every raw response
    log_results: bool,
}

impl<D: Driver> LoggingDriver<D> {
    pub fn new(inner: D) -> Self {
        LoggingDriver {
            inner,
            log_queries: true,
            log_results: true,
        }
    }

    pub fn log_queries(mut self, enable: bool) -> Self {
        self.log_queries = enable;
        self
    }

    pub fn log_results(mut self, enable: bool) -> Self {
        self.log_results = enable;
        self
    }

    pub fn into_inner(self) -> D {
        self.inner
    }
}

#[async_trait]
impl<D: Driver> Driver for LoggingDriver<D> {
    async fn exec(&self, op: Operation) -> Result<Response> {
        let name = op.name();
        let target = op.target().to_string();

        if self.log_queries {
            tracing::info!(operation = name, target = %target, query = %op.to_json(), "store query");
        }

        let response = self.inner.exec(op).await;

        match &response {
            Ok(response) if self.log_results => {
                tracing::info!(operation = name, target = %target, result = %response.to_json(), "store result");
            }
            Err(err) if self.log_results || self.log_queries => {
                tracing::info!(operation = name, target = %target, error = %err, "store query failed");
            }
            _ => {}
        }

        response
    }
}
