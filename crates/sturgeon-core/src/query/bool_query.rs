use super::Query;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Occurrence type of a boolean query clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clause {
    Must,
    MustNot,
    Filter,
    Should,
}

/// A compound query: each clause holds the leaf queries combined under it.
///
/// A bool query with no clauses matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolQuery {
    pub clauses: IndexMap<Clause, Vec<Query>>,
}

impl Clause {
    pub const ALL: [Clause; 4] = [Clause::Must, Clause::MustNot, Clause::Filter, Clause::Should];

    pub fn as_str(self) -> &'static str {
        match self {
            Clause::Must => "must",
            Clause::MustNot => "must_not",
            Clause::Filter => "filter",
            Clause::Should => "should",
        }
    }
}

impl core::fmt::Display for Clause {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BoolQuery {
    pub fn new() -> BoolQuery {
        BoolQuery::default()
    }

    pub fn push(&mut self, clause: Clause, query: impl Into<Query>) {
        self.clauses.entry(clause).or_default().push(query.into());
    }

    pub fn clause(&self, clause: Clause) -> &[Query] {
        self.clauses
            .get(&clause)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.values().all(Vec::is_empty)
    }

    pub fn to_json(&self) -> Value {
        let mut body = Map::new();
        for (clause, queries) in &self.clauses {
            if queries.is_empty() {
                continue;
            }
            body.insert(
                clause.as_str().to_string(),
                Value::Array(queries.iter().map(Query::to_json).collect()),
            );
        }
        Value::Object(body)
    }
}
