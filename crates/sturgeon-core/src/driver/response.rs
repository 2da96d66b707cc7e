use crate::{Error, Result};

use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Raw metadata per collection name, as returned by the mapping API
    Mappings(Map<String, Value>),

    /// Search hits and aggregation results
    Hits(SearchHits),

    /// Result of a get-by-id; `None` when the store has no such document
    Document(Option<Hit>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHits {
    pub hits: Vec<Hit>,

    /// Raw aggregation results keyed by aggregation name
    pub aggregations: Map<String, Value>,
}

/// One stored document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hit {
    /// Store-assigned identifier
    pub id: String,

    /// Source fields under their original names
    pub source: Map<String, Value>,
}

impl Response {
    pub fn name(&self) -> &'static str {
        match self {
            Response::Mappings(_) => "mappings",
            Response::Hits(_) => "hits",
            Response::Document(_) => "document",
        }
    }

    pub fn into_mappings(self) -> Result<Map<String, Value>> {
        match self {
            Response::Mappings(mappings) => Ok(mappings),
            other => Err(Error::invalid_response(format!(
                "expected mappings, got {}",
                other.name()
            ))),
        }
    }

    pub fn into_hits(self) -> Result<SearchHits> {
        match self {
            Response::Hits(hits) => Ok(hits),
            other => Err(Error::invalid_response(format!(
                "expected hits, got {}",
                other.name()
            ))),
        }
    }

    pub fn into_document(self) -> Result<Option<Hit>> {
        match self {
            Response::Document(document) => Ok(document),
            other => Err(Error::invalid_response(format!(
                "expected document, got {}",
                other.name()
            ))),
        }
    }

    /// A JSON rendering of the response, used for result logging.
    pub fn to_json(&self) -> Value {
        match self {
            Response::Mappings(mappings) => Value::Object(mappings.clone()),
            Response::Hits(hits) => {
                let mut body = Map::new();
                body.insert(
                    "hits".to_string(),
                    Value::Array(hits.hits.iter().map(Hit::to_json).collect()),
                );
                if !hits.aggregations.is_empty() {
                    body.insert(
                        "aggregations".to_string(),
                        Value::Object(hits.aggregations.clone()),
                    );
                }
                Value::Object(body)
            }
            Response::Document(Some(hit)) => hit.to_json(),
            Response::Document(None) => Value::Null,
        }
    }
}

impl Hit {
    pub fn new(id: impl Into<String>, source: Map<String, Value>) -> Hit {
        Hit {
            id: id.into(),
            source,
        }
    }

    pub fn to_json(&self) -> Value {
        let mut body = Map::new();
        body.insert("_id".to_string(), Value::String(self.id.clone()));
        body.insert("_source".to_string(), Value::Object(self.source.clone()));
        Value::Object(body)
    }
}
