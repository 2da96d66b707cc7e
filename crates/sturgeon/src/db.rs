mod builder;
pub use builder::Builder;

mod request;
pub use request::FieldRequest;

use crate::{engine::Engine, schema, Config, Error, Result};

use futures::future::join_all;
use serde_json::Value;
use std::{sync::Arc, time::Instant};
use sturgeon_core::{
    driver::operation::GetMappings,
    schema::ResolveContext,
    Names, Schema,
};

/// A handle to a generated schema and the store behind it.
///
/// Cloning is cheap; clones share the schema, the name registry and the
/// driver.
#[derive(Debug, Clone)]
pub struct Sturgeon {
    engine: Engine,
    schema: Arc<Schema>,
}

impl Sturgeon {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The generated root schema.
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// The name registry shared by every build of this handle.
    pub fn names(&self) -> &Arc<Names> {
        &self.engine.names
    }

    pub fn config(&self) -> &Config {
        &self.engine.config
    }

    /// Runs one root field.
    pub async fn resolve(&self, request: FieldRequest) -> Result<Value> {
        let field = self.schema.field(&request.field).ok_or_else(|| {
            Error::invalid_argument("field", format!("no root field `{}`", request.field))
        })?;

        let Some(resolver) = field.resolver.clone() else {
            return Err(Error::invalid_argument(
                "field",
                format!("root field `{}` has no resolver", request.field),
            ));
        };

        let mut cx = ResolveContext::new(request.args, request.selection);
        cx.deadline = request.deadline;

        resolver.resolve(cx).await
    }

    /// Runs sibling root fields concurrently. Results come back in request
    /// order, one per field; a failed field does not affect the others.
    pub async fn execute(&self, requests: Vec<FieldRequest>) -> Vec<Result<Value>> {
        join_all(requests.into_iter().map(|request| self.resolve(request))).await
    }

    /// Fetches the store metadata again and regenerates the schema.
    ///
    /// Names registered by earlier builds stay registered. On failure the
    /// current schema is kept.
    pub async fn rebuild(&mut self) -> Result<()> {
        self.rebuild_impl(None).await
    }

    /// Like [`rebuild`](Self::rebuild), but gives up fetching the metadata
    /// at `deadline`.
    pub async fn rebuild_before(&mut self, deadline: Instant) -> Result<()> {
        self.rebuild_impl(Some(deadline)).await
    }

    async fn rebuild_impl(&mut self, deadline: Option<Instant>) -> Result<()> {
        let metadata = fetch_mappings(&self.engine, deadline).await?;
        self.schema = Arc::new(schema::build_schema(&self.engine, metadata).await?);
        Ok(())
    }

    pub(crate) async fn from_metadata(
        engine: Engine,
        metadata: serde_json::Map<String, Value>,
    ) -> Result<Sturgeon> {
        let schema = schema::build_schema(&engine, metadata).await?;

        Ok(Sturgeon {
            engine,
            schema: Arc::new(schema),
        })
    }
}

pub(crate) async fn fetch_mappings(
    engine: &Engine,
    deadline: Option<Instant>,
) -> Result<serde_json::Map<String, Value>> {
    let op = GetMappings {
        pattern: engine.config.index_include_pattern.clone(),
    };

    engine.exec(op.into(), deadline).await?.into_mappings()
}
