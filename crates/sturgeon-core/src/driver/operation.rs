mod get_by_id;
pub use get_by_id::GetById;

mod get_mappings;
pub use get_mappings::GetMappings;

mod search;
pub use search::Search;

use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Fetch field metadata for every collection matching a pattern
    GetMappings(GetMappings),

    /// Fetch one document by its store-assigned id
    GetById(GetById),

    /// Run a query, optionally with aggregations
    Search(Search),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetMappings(_) => "get_mappings",
            Operation::GetById(_) => "get_by_id",
            Operation::Search(_) => "search",
        }
    }

    /// The collection (or pattern) the operation targets.
    pub fn target(&self) -> &str {
        match self {
            Operation::GetMappings(op) => &op.pattern,
            Operation::GetById(op) => &op.collection,
            Operation::Search(op) => &op.collection,
        }
    }

    /// A JSON description of the operation, used for query logging.
    pub fn to_json(&self) -> Value {
        match self {
            Operation::GetMappings(op) => json!({ "pattern": op.pattern }),
            Operation::GetById(op) => json!({
                "index": op.collection,
                "id": op.id,
                "_source": op.source.to_json(),
            }),
            Operation::Search(op) => json!({
                "index": op.collection,
                "body": op.body(),
            }),
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, Operation::Search(_))
    }

    pub fn is_get_by_id(&self) -> bool {
        matches!(self, Operation::GetById(_))
    }
}
