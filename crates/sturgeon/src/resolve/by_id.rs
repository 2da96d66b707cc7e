use super::Collection;
use crate::{
    engine::{args::ByIdArgs, mapper::Mapper, projection::Projection, Engine},
    err, Result,
};

use serde_json::Value;
use std::sync::Arc;
use sturgeon_core::{
    async_trait,
    driver::operation::GetById,
    schema::{Resolve, ResolveContext},
};

/// Resolves `<c>_by_id(id)`. A missing document resolves to `null`.
#[derive(Debug)]
pub(crate) struct ByIdResolver {
    engine: Engine,
    collection: Arc<Collection>,
}

impl ByIdResolver {
    pub(crate) fn new(engine: Engine, collection: Arc<Collection>) -> ByIdResolver {
        ByIdResolver { engine, collection }
    }

    async fn get(&self, cx: ResolveContext) -> Result<Value> {
        let args = ByIdArgs::decode(&cx.args)?;
        let projection = Projection::from_selection(&self.engine.names, &cx.selection);

        let op = GetById {
            collection: self.collection.original.clone(),
            id: args.id,
            source: projection.source(),
        };

        let document = self
            .engine
            .exec(op.into(), cx.deadline)
            .await?
            .into_document()?;

        let Some(hit) = document else {
            return Ok(Value::Null);
        };

        let mapper = Mapper::new(&self.engine.names, &self.collection);
        Ok(mapper.document(hit, projection.include_id))
    }
}

#[async_trait]
impl Resolve for ByIdResolver {
    async fn resolve(&self, cx: ResolveContext) -> Result<Value> {
        self.get(cx)
            .await
            .map_err(|e| e.context(err!("resolving `{}_by_id`", self.collection.name)))
    }
}
