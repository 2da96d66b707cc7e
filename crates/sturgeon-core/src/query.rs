//! The store's native query language.
//!
//! Requests sent to a driver are built from these types. Each type knows
//! its JSON rendering via `to_json`, which is what HTTP drivers send and
//! what query logging prints.

mod aggregation;
pub use aggregation::{Aggregation, AggregationKind};

mod bool_query;
pub use bool_query::{BoolQuery, Clause};

mod range;
pub use range::{RangeOp, RangeQuery};

mod source;
pub use source::SourceFilter;

use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Bool(BoolQuery),
    Range(RangeQuery),
}

impl Query {
    /// A query matching every document.
    pub fn match_all() -> Query {
        Query::Bool(BoolQuery::default())
    }

    pub fn to_json(&self) -> Value {
        match self {
            Query::Bool(query) => json!({ "bool": query.to_json() }),
            Query::Range(query) => json!({ "range": query.to_json() }),
        }
    }
}

impl Default for Query {
    fn default() -> Self {
        Query::match_all()
    }
}

impl From<BoolQuery> for Query {
    fn from(value: BoolQuery) -> Self {
        Query::Bool(value)
    }
}

impl From<RangeQuery> for Query {
    fn from(value: RangeQuery) -> Self {
        Query::Range(value)
    }
}
