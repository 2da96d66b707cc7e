//! Request-time machinery shared by every resolver: argument decoding,
//! filter translation, aggregation requests and result mapping.

pub(crate) mod aggregate;
pub(crate) mod args;
pub(crate) mod mapper;
pub(crate) mod projection;
pub(crate) mod translate;

use crate::{driver::Driver, Config, Error, Result};

use std::{sync::Arc, time::Instant};
use sturgeon_core::{
    driver::{Operation, Response},
    Names,
};

/// State shared by the schema builder and every resolver it creates.
#[derive(Debug, Clone)]
pub(crate) struct Engine {
    pub(crate) driver: Arc<dyn Driver>,
    pub(crate) names: Arc<Names>,
    pub(crate) config: Arc<Config>,
}

impl Engine {
    pub(crate) fn new(driver: Arc<dyn Driver>, names: Arc<Names>, config: Arc<Config>) -> Engine {
        Engine {
            driver,
            names,
            config,
        }
    }

    /// Sends one operation to the store, giving up at `deadline`.
    ///
    /// Without a deadline the configured request timeout applies, if any.
    pub(crate) async fn exec(&self, op: Operation, deadline: Option<Instant>) -> Result<Response> {
        let deadline = deadline.or_else(|| {
            self.config
                .request_timeout
                .map(|timeout| Instant::now() + timeout)
        });

        let Some(deadline) = deadline else {
            return self.driver.exec(op).await;
        };

        let description = format!("{} on `{}`", op.name(), op.target());

        match tokio::time::timeout_at(deadline.into(), self.driver.exec(op)).await {
            Ok(response) => response,
            Err(_) => Err(Error::deadline_exceeded(description)),
        }
    }
}
