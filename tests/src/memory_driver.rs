use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::{cmp::Ordering, sync::Mutex};
use sturgeon_core::{
    async_trait,
    driver::{
        operation::{GetById, GetMappings, Search},
        Hit, Operation, Response, SearchHits,
    },
    query::{Aggregation, AggregationKind, BoolQuery, Clause, Query, RangeOp, RangeQuery, SourceFilter},
    Driver, Error, Result,
};

/// Percentiles computed when a request names none.
const DEFAULT_PERCENTS: [f64; 7] = [1.0, 5.0, 25.0, 50.0, 75.0, 95.0, 99.0];

/// An in-memory document store.
///
/// Honors bool/range queries, source filtering, result size and the six
/// metric aggregations closely enough to exercise the engine end to end.
#[derive(Debug, Default)]
pub struct MemoryDriver {
    collections: Mutex<IndexMap<String, Collection>>,
}

#[derive(Debug, Default)]
struct Collection {
    metadata: Value,
    documents: IndexMap<String, Map<String, Value>>,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a collection with the given mapping metadata.
    pub fn collection(self, name: &str, metadata: Value) -> Self {
        self.create_collection(name, metadata);
        self
    }

    pub fn create_collection(&self, name: &str, metadata: Value) {
        self.collections.lock().unwrap().insert(
            name.to_string(),
            Collection {
                metadata,
                documents: IndexMap::new(),
            },
        );
    }

    /// Stores a document; `source` must be a JSON object.
    pub fn document(self, collection: &str, id: &str, source: Value) -> Self {
        self.insert(collection, id, source);
        self
    }

    pub fn insert(&self, collection: &str, id: &str, source: Value) {
        let Value::Object(source) = source else {
            panic!("document source must be an object");
        };

        self.collections
            .lock()
            .unwrap()
            .get_mut(collection)
            .expect("unknown collection")
            .documents
            .insert(id.to_string(), source);
    }

    fn get_mappings(&self, op: &GetMappings) -> Response {
        let collections = self.collections.lock().unwrap();

        let mappings = collections
            .iter()
            .filter(|(name, _)| op.pattern.split(',').any(|pattern| glob(pattern.trim(), name)))
            .map(|(name, collection)| (name.clone(), collection.metadata.clone()))
            .collect();

        Response::Mappings(mappings)
    }

    fn get_by_id(&self, op: &GetById) -> Result<Response> {
        let collections = self.collections.lock().unwrap();
        let collection = lookup(&collections, &op.collection)?;

        let document = collection
            .documents
            .get(&op.id)
            .map(|source| Hit::new(&op.id, filter_source(source, &op.source)));

        Ok(Response::Document(document))
    }

    fn search(&self, op: &Search) -> Result<Response> {
        let collections = self.collections.lock().unwrap();
        let collection = lookup(&collections, &op.collection)?;

        let matched: Vec<(&String, &Map<String, Value>)> = collection
            .documents
            .iter()
            .filter(|(_, source)| matches(&op.query, source))
            .collect();

        let hits = matched
            .iter()
            .take(op.size as usize)
            .map(|(id, source)| Hit::new(*id, filter_source(source, &op.source)))
            .collect();

        let aggregations = op
            .aggregations
            .iter()
            .map(|aggregation| {
                let values = matched.iter().filter_map(|(_, source)| source.get(&aggregation.field));
                (aggregation.name.clone(), aggregate(aggregation, values))
            })
            .collect();

        Ok(Response::Hits(SearchHits { hits, aggregations }))
    }
}

#[async_trait]
impl Driver for MemoryDriver {
    async fn exec(&self, op: Operation) -> Result<Response> {
        match &op {
            Operation::GetMappings(op) => Ok(self.get_mappings(op)),
            Operation::GetById(op) => self.get_by_id(op),
            Operation::Search(op) => self.search(op),
        }
    }
}

fn lookup<'a>(collections: &'a IndexMap<String, Collection>, name: &str) -> Result<&'a Collection> {
    collections.get(name).ok_or_else(|| {
        Error::query_failed(
            404,
            Some("index_not_found_exception"),
            Some(&format!("no such index [{name}]")),
        )
    })
}

/// `*` matches any run of characters; everything else matches itself.
fn glob(pattern: &str, name: &str) -> bool {
    match pattern.split_once('*') {
        None => pattern == name,
        Some((prefix, rest)) => {
            let Some(name) = name.strip_prefix(prefix) else {
                return false;
            };
            (0..=name.len())
                .filter(|i| name.is_char_boundary(*i))
                .any(|i| glob(rest, &name[i..]))
        }
    }
}

fn filter_source(source: &Map<String, Value>, filter: &SourceFilter) -> Map<String, Value> {
    source
        .iter()
        .filter(|(field, _)| filter.includes(field))
        .map(|(field, value)| (field.clone(), value.clone()))
        .collect()
}

fn matches(query: &Query, source: &Map<String, Value>) -> bool {
    match query {
        Query::Bool(query) => matches_bool(query, source),
        Query::Range(query) => matches_range(query, source),
    }
}

fn matches_bool(query: &BoolQuery, source: &Map<String, Value>) -> bool {
    let all = |clause| query.clause(clause).iter().all(|q| matches(q, source));

    if !all(Clause::Must) || !all(Clause::Filter) {
        return false;
    }

    if query.clause(Clause::MustNot).iter().any(|q| matches(q, source)) {
        return false;
    }

    // `should` is required only when nothing else constrains the query
    let should = query.clause(Clause::Should);
    let required = query.clause(Clause::Must).is_empty() && query.clause(Clause::Filter).is_empty();

    !required || should.is_empty() || should.iter().any(|q| matches(q, source))
}

fn matches_range(query: &RangeQuery, source: &Map<String, Value>) -> bool {
    let Some(value) = source.get(&query.field) else {
        return false;
    };

    query.bounds.iter().all(|(op, bound)| {
        let Some(ordering) = compare(value, bound) else {
            return false;
        };

        match op {
            RangeOp::Lt => ordering == Ordering::Less,
            RangeOp::Lte => ordering != Ordering::Greater,
            RangeOp::Gt => ordering == Ordering::Greater,
            RangeOp::Gte => ordering != Ordering::Less,
        }
    })
}

fn compare(value: &Value, bound: &Value) -> Option<Ordering> {
    match (value, bound) {
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn aggregate<'a>(aggregation: &Aggregation, values: impl Iterator<Item = &'a Value>) -> Value {
    let values: Vec<&Value> = values.collect();
    let numbers: Vec<f64> = values.iter().filter_map(|value| value.as_f64()).collect();

    let single = |value: Option<f64>| {
        let mut entry = Map::new();
        entry.insert("value".to_string(), value.map_or(Value::Null, Value::from));
        Value::Object(entry)
    };

    match aggregation.kind {
        AggregationKind::Min => single(numbers.iter().copied().reduce(f64::min)),
        AggregationKind::Max => single(numbers.iter().copied().reduce(f64::max)),
        AggregationKind::Sum => single(Some(numbers.iter().sum())),
        AggregationKind::Avg => single(
            (!numbers.is_empty()).then(|| numbers.iter().sum::<f64>() / numbers.len() as f64),
        ),
        AggregationKind::Cardinality => {
            let mut distinct: Vec<String> = values.iter().map(|value| value.to_string()).collect();
            distinct.sort();
            distinct.dedup();

            let mut entry = Map::new();
            entry.insert("value".to_string(), Value::from(distinct.len() as u64));
            Value::Object(entry)
        }
        AggregationKind::Percentiles => {
            let mut sorted = numbers;
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

            let values = DEFAULT_PERCENTS
                .iter()
                .map(|percent| {
                    let mut pair = Map::new();
                    pair.insert("key".to_string(), Value::from(*percent));
                    pair.insert(
                        "value".to_string(),
                        nearest_rank(&sorted, *percent).map_or(Value::Null, Value::from),
                    );
                    Value::Object(pair)
                })
                .collect();

            let mut entry = Map::new();
            entry.insert("values".to_string(), Value::Array(values));
            Value::Object(entry)
        }
    }
}

fn nearest_rank(sorted: &[f64], percent: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let rank = (percent / 100.0 * sorted.len() as f64).ceil() as usize;
    sorted.get(rank.max(1) - 1).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glob_patterns() {
        assert!(glob("*", "logs"));
        assert!(glob("logs-*", "logs-2024"));
        assert!(glob("*-2024", "logs-2024"));
        assert!(glob("l*s", "logs"));
        assert!(!glob("logs-*", "metrics"));
        assert!(!glob("logs", "logs-2024"));
    }

    #[test]
    fn nearest_rank_percentiles() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(nearest_rank(&sorted, 50.0), Some(2.0));
        assert_eq!(nearest_rank(&sorted, 99.0), Some(4.0));
        assert_eq!(nearest_rank(&sorted, 1.0), Some(1.0));
        assert_eq!(nearest_rank(&[], 50.0), None);
    }
}
