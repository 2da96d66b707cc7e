use super::{fetch_mappings, Sturgeon};
use crate::{
    driver::{Driver, LoggingDriver},
    engine::Engine,
    Config, Result,
};

use serde_json::{Map, Value};
use std::{sync::Arc, time::Instant};
use sturgeon_core::Names;

#[derive(Debug, Default)]
pub struct Builder {
    config: Config,

    /// Registry to share with other handles; a fresh one otherwise
    names: Option<Arc<Names>>,

    /// Bounds the metadata fetch in `build`
    deadline: Option<Instant>,
}

impl Builder {
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    pub fn names(&mut self, names: Arc<Names>) -> &mut Self {
        self.names = Some(names);
        self
    }

    /// Gives up discovering collections at `deadline`. Without one the
    /// configured request timeout applies.
    pub fn deadline(&mut self, deadline: Instant) -> &mut Self {
        self.deadline = Some(deadline);
        self
    }

    /// Connects to the store at `url` with the built-in driver.
    #[cfg(feature = "elasticsearch")]
    pub async fn connect(&mut self, url: &str) -> Result<Sturgeon> {
        let driver = sturgeon_driver_elasticsearch::Elasticsearch::connect(url)?;
        self.build(driver).await
    }

    /// Discovers every collection matching the include pattern and builds
    /// the schema from its metadata.
    pub async fn build(&mut self, driver: impl Driver) -> Result<Sturgeon> {
        let engine = self.engine(driver);
        let metadata = fetch_mappings(&engine, self.deadline).await?;
        Sturgeon::from_metadata(engine, metadata).await
    }

    /// Builds the schema from metadata already at hand. The driver is only
    /// used for requests.
    pub async fn build_from_metadata(
        &mut self,
        driver: impl Driver,
        metadata: Map<String, Value>,
    ) -> Result<Sturgeon> {
        let engine = self.engine(driver);
        Sturgeon::from_metadata(engine, metadata).await
    }

    fn engine(&self, driver: impl Driver) -> Engine {
        let driver: Arc<dyn Driver> =
            if self.config.enable_query_logging || self.config.enable_result_logging {
                Arc::new(
                    LoggingDriver::new(driver)
                        .log_queries(self.config.enable_query_logging)
                        .log_results(self.config.enable_result_logging),
                )
            } else {
                Arc::new(driver)
            };

        let names = self.names.clone().unwrap_or_default();

        Engine::new(driver, names, Arc::new(self.config.clone()))
    }
}
