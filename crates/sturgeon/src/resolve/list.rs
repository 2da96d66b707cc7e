use super::Collection;
use crate::{
    engine::{args::ListArgs, mapper::Mapper, projection::Projection, translate, Engine},
    err, Result,
};

use serde_json::Value;
use std::sync::Arc;
use sturgeon_core::{
    async_trait,
    driver::operation::Search,
    schema::{Resolve, ResolveContext},
};

/// Resolves `<c>(size, boolean_query)`.
#[derive(Debug)]
pub(crate) struct ListResolver {
    engine: Engine,
    collection: Arc<Collection>,
}

impl ListResolver {
    pub(crate) fn new(engine: Engine, collection: Arc<Collection>) -> ListResolver {
        ListResolver { engine, collection }
    }

    async fn list(&self, cx: ResolveContext) -> Result<Value> {
        let args = ListArgs::decode(&cx.args)?;
        let projection = Projection::from_selection(&self.engine.names, &cx.selection);

        let mut search = Search::new(
            &self.collection.original,
            translate::filter(&self.engine.names, args.boolean_query.as_ref()),
        );
        search.size = args.size;
        search.source = projection.source();

        let hits = self
            .engine
            .exec(search.into(), cx.deadline)
            .await?
            .into_hits()?;

        let mapper = Mapper::new(&self.engine.names, &self.collection);
        Ok(Value::Array(mapper.documents(hits.hits, &projection)))
    }
}

#[async_trait]
impl Resolve for ListResolver {
    async fn resolve(&self, cx: ResolveContext) -> Result<Value> {
        self.list(cx)
            .await
            .map_err(|e| e.context(err!("resolving `{}`", self.collection.name)))
    }
}
