use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Range comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeOp {
    Lt,
    Lte,
    Gt,
    Gte,
}

/// Compares one field against one or more bounds. All bounds must hold.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeQuery {
    /// Store (original) field name.
    pub field: String,
    pub bounds: IndexMap<RangeOp, Value>,
}

impl RangeOp {
    pub const ALL: [RangeOp; 4] = [RangeOp::Lt, RangeOp::Lte, RangeOp::Gt, RangeOp::Gte];

    pub fn as_str(self) -> &'static str {
        match self {
            RangeOp::Lt => "lt",
            RangeOp::Lte => "lte",
            RangeOp::Gt => "gt",
            RangeOp::Gte => "gte",
        }
    }
}

impl core::fmt::Display for RangeOp {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RangeQuery {
    pub fn new(field: impl Into<String>) -> RangeQuery {
        RangeQuery {
            field: field.into(),
            bounds: IndexMap::new(),
        }
    }

    pub fn bound(mut self, op: RangeOp, value: impl Into<Value>) -> RangeQuery {
        self.bounds.insert(op, value.into());
        self
    }

    pub fn get(&self, op: RangeOp) -> Option<&Value> {
        self.bounds.get(&op)
    }

    pub fn to_json(&self) -> Value {
        let bounds: Map<String, Value> = self
            .bounds
            .iter()
            .map(|(op, value)| (op.as_str().to_string(), value.clone()))
            .collect();

        let mut body = Map::new();
        body.insert(self.field.clone(), Value::Object(bounds));
        Value::Object(body)
    }
}
