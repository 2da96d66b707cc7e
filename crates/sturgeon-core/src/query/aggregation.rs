use serde::Deserialize;
use serde_json::{Map, Value};

/// Summary statistic computed by the store over one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationKind {
    Min,
    Max,
    Avg,
    Sum,
    Cardinality,
    Percentiles,
}

/// One named metric aggregation in a search request.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    /// Key of this entry in the request and in the response.
    pub name: String,
    pub kind: AggregationKind,

    /// Store (original) field name.
    pub field: String,
}

impl AggregationKind {
    pub const ALL: [AggregationKind; 6] = [
        AggregationKind::Min,
        AggregationKind::Max,
        AggregationKind::Avg,
        AggregationKind::Sum,
        AggregationKind::Cardinality,
        AggregationKind::Percentiles,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AggregationKind::Min => "min",
            AggregationKind::Max => "max",
            AggregationKind::Avg => "avg",
            AggregationKind::Sum => "sum",
            AggregationKind::Cardinality => "cardinality",
            AggregationKind::Percentiles => "percentiles",
        }
    }

    pub fn from_name(name: &str) -> Option<AggregationKind> {
        AggregationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
    }
}

impl core::fmt::Display for AggregationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Aggregation {
    /// Builds an entry named `<kind>_<field>`, unique per kind and field
    /// within one request.
    pub fn new(kind: AggregationKind, field: impl Into<String>) -> Aggregation {
        let field = field.into();
        Aggregation {
            name: format!("{}_{}", kind.as_str(), field),
            kind,
            field,
        }
    }

    pub fn to_json(&self) -> Value {
        let mut body = Map::new();
        body.insert("field".to_string(), Value::String(self.field.clone()));

        // Array-shaped response so decoding does not depend on key formatting
        if self.kind == AggregationKind::Percentiles {
            body.insert("keyed".to_string(), Value::Bool(false));
        }

        let mut entry = Map::new();
        entry.insert(self.kind.as_str().to_string(), Value::Object(body));
        Value::Object(entry)
    }
}
