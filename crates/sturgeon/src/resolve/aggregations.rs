use super::Collection;
use crate::{
    engine::{aggregate, args::AggregationArgs, translate, Engine},
    err, Result,
};

use serde_json::{Map, Value};
use std::sync::Arc;
use sturgeon_core::{
    async_trait,
    driver::operation::Search,
    query::SourceFilter,
    schema::{Resolve, ResolveContext},
};

/// Resolves `<c>_aggregations(boolean_query)`.
///
/// Every selected kind is computed in one size-0 search over the documents
/// matching the filter.
#[derive(Debug)]
pub(crate) struct AggregationResolver {
    engine: Engine,
    collection: Arc<Collection>,
}

impl AggregationResolver {
    pub(crate) fn new(engine: Engine, collection: Arc<Collection>) -> AggregationResolver {
        AggregationResolver { engine, collection }
    }

    async fn aggregate(&self, cx: ResolveContext) -> Result<Value> {
        let args = AggregationArgs::decode(&cx.args)?;
        let requested = aggregate::requested(&self.collection, &cx.selection);

        let mut search = Search::new(
            &self.collection.original,
            translate::filter(&self.engine.names, args.boolean_query.as_ref()),
        );
        search.source = SourceFilter::Disabled;
        search.aggregations = requested
            .iter()
            .flat_map(|(kind, fields)| aggregate::request(*kind, fields))
            .collect();

        let mut results = Map::new();

        // Nothing to compute; an empty object per selected kind
        if search.aggregations.is_empty() {
            for (kind, _) in &requested {
                results.insert(kind.as_str().to_string(), Value::Object(Map::new()));
            }
            return Ok(Value::Object(results));
        }

        let hits = self
            .engine
            .exec(search.into(), cx.deadline)
            .await?
            .into_hits()?;

        for (kind, fields) in &requested {
            results.insert(
                kind.as_str().to_string(),
                Value::Object(aggregate::parse(&hits.aggregations, *kind, fields)),
            );
        }

        Ok(Value::Object(results))
    }
}

#[async_trait]
impl Resolve for AggregationResolver {
    async fn resolve(&self, cx: ResolveContext) -> Result<Value> {
        self.aggregate(cx)
            .await
            .map_err(|e| e.context(err!("resolving `{}_aggregations`", self.collection.name)))
    }
}
