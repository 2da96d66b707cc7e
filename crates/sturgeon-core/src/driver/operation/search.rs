use super::*;

use crate::query::{Aggregation, Query, SourceFilter};

use serde_json::Map;

#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    /// Which collection to search
    pub collection: String,

    /// Documents must match this query
    pub query: Query,

    /// Maximum number of hits to return. Aggregation-only searches use 0.
    pub size: u64,

    /// Which source fields to return for each hit
    pub source: SourceFilter,

    /// Metric aggregations computed over all matching documents
    pub aggregations: Vec<Aggregation>,
}

impl Search {
    pub fn new(collection: impl Into<String>, query: Query) -> Search {
        Search {
            collection: collection.into(),
            query,
            size: 0,
            source: SourceFilter::All,
            aggregations: vec![],
        }
    }

    /// The request body in the store's search DSL.
    pub fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".to_string(), self.query.to_json());
        body.insert("size".to_string(), Value::from(self.size));
        body.insert("_source".to_string(), self.source.to_json());

        if !self.aggregations.is_empty() {
            let aggs: Map<String, Value> = self
                .aggregations
                .iter()
                .map(|aggregation| (aggregation.name.clone(), aggregation.to_json()))
                .collect();
            body.insert("aggs".to_string(), Value::Object(aggs));
        }

        Value::Object(body)
    }
}

impl From<Search> for Operation {
    fn from(value: Search) -> Self {
        Self::Search(value)
    }
}
