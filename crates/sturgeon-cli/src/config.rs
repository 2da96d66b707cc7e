use anyhow::{Context, Result};
use clap::{ArgAction, Args};
use std::time::Duration;
use sturgeon::{Config, Sturgeon};

/// Store connection and schema options. Every flag has an environment
/// fallback.
#[derive(Args, Debug, Clone)]
pub struct ConnectArgs {
    /// Comma-separated store host URLs
    #[arg(
        long,
        env = "STURGEON_ELASTICSEARCH_HOSTS",
        default_value = "http://localhost:9200"
    )]
    pub hosts: String,

    /// Collections to expose; `*` matches any run of characters
    #[arg(
        long,
        env = "STURGEON_ELASTICSEARCH_INDEX_INCLUDE_PATTERN",
        default_value = "*"
    )]
    pub index_include_pattern: String,

    /// Leave out fields whose name starts with this prefix
    #[arg(long, env = "STURGEON_FIELD_IGNORE_PREFIX")]
    pub field_ignore_prefix: Option<String>,

    /// Generate `<collection>_aggregations` root fields
    #[arg(
        long,
        env = "STURGEON_ENABLE_AGGREGATION_SCHEMA",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub enable_aggregation_schema: bool,

    /// Log every query sent to the store
    #[arg(
        long,
        env = "STURGEON_ENABLE_QUERY_LOGGING",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub enable_query_logging: bool,

    /// Log every raw store response
    #[arg(
        long,
        env = "STURGEON_ENABLE_QUERY_RESULT_LOGGING",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub enable_query_result_logging: bool,

    /// Default deadline for store requests, in milliseconds
    #[arg(long, env = "STURGEON_REQUEST_TIMEOUT_MS")]
    pub request_timeout_ms: Option<u64>,
}

impl ConnectArgs {
    pub fn to_config(&self) -> Config {
        let mut config = Config::new()
            .index_include_pattern(&self.index_include_pattern)
            .enable_aggregations(self.enable_aggregation_schema)
            .enable_query_logging(self.enable_query_logging)
            .enable_result_logging(self.enable_query_result_logging);

        if let Some(prefix) = &self.field_ignore_prefix {
            config = config.field_ignore_prefix(prefix);
        }

        if let Some(timeout) = self.request_timeout_ms {
            config = config.request_timeout(Duration::from_millis(timeout));
        }

        config
    }

    pub async fn connect(&self) -> Result<Sturgeon> {
        tracing::info!(hosts = %self.hosts, pattern = %self.index_include_pattern, "connecting");

        Sturgeon::builder()
            .config(self.to_config())
            .connect(&self.hosts)
            .await
            .with_context(|| format!("failed to build schema from {}", self.hosts))
    }
}
