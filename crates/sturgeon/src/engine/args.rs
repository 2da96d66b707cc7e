//! Decoding of resolver arguments into typed structures.
//!
//! The execution engine hands resolvers a raw JSON object. Each operation's
//! arguments are decoded once here; nothing downstream inspects raw JSON.

use crate::{Error, Result};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};
use sturgeon_core::query::{Clause, RangeOp};

/// Arguments of the `<c>` list field.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ListArgs {
    pub(crate) size: u64,
    pub(crate) boolean_query: Option<BooleanQueryArg>,
}

/// Arguments of the `<c>_by_id` field.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ByIdArgs {
    pub(crate) id: String,
}

/// Arguments of the `<c>_aggregations` field.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct AggregationArgs {
    pub(crate) boolean_query: Option<BooleanQueryArg>,
}

/// Value of a `boolean_query` argument: clause, then normalized field
/// name, then term-level query.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct BooleanQueryArg {
    pub clauses: IndexMap<Clause, IndexMap<String, TermLevelArg>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TermLevelArg {
    #[serde(default)]
    pub range: Option<RangeArg>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RangeArg {
    pub bounds: IndexMap<RangeOp, Value>,
}

impl ListArgs {
    pub(crate) fn decode(args: &Map<String, Value>) -> Result<ListArgs> {
        let size = required(args, "size")?;
        let size = size
            .as_u64()
            .ok_or_else(|| Error::invalid_argument("size", "expected a non-negative integer"))?;

        Ok(ListArgs {
            size,
            boolean_query: BooleanQueryArg::decode(args.get("boolean_query"))?,
        })
    }
}

impl ByIdArgs {
    pub(crate) fn decode(args: &Map<String, Value>) -> Result<ByIdArgs> {
        let id = match required(args, "id")? {
            Value::String(id) => id.clone(),
            // ID inputs accept integers
            Value::Number(id) if id.is_i64() || id.is_u64() => id.to_string(),
            _ => return Err(Error::invalid_argument("id", "expected a string")),
        };

        Ok(ByIdArgs { id })
    }
}

impl AggregationArgs {
    pub(crate) fn decode(args: &Map<String, Value>) -> Result<AggregationArgs> {
        Ok(AggregationArgs {
            boolean_query: BooleanQueryArg::decode(args.get("boolean_query"))?,
        })
    }
}

impl BooleanQueryArg {
    /// Decodes an optional `boolean_query` value. An absent or `null`
    /// argument decodes to `None`.
    pub fn decode(value: Option<&Value>) -> Result<Option<BooleanQueryArg>> {
        let value = match value {
            None | Some(Value::Null) => return Ok(None),
            Some(value) => prune_nulls(value.clone()),
        };

        let arg: BooleanQueryArg = serde_json::from_value(value)
            .map_err(|err| Error::invalid_argument("boolean_query", err.to_string()))?;

        for (clause, fields) in &arg.clauses {
            for (field, term) in fields {
                let Some(range) = &term.range else { continue };

                for (op, bound) in &range.bounds {
                    if !is_scalar(bound) {
                        return Err(Error::invalid_argument(
                            "boolean_query",
                            format!("{clause}.{field}.range.{op} must be a scalar value"),
                        ));
                    }
                }
            }
        }

        Ok(Some(arg))
    }
}

fn required<'a>(args: &'a Map<String, Value>, name: &str) -> Result<&'a Value> {
    match args.get(name) {
        Some(Value::Null) | None => Err(Error::invalid_argument(
            name,
            format!("argument {name} not found"),
        )),
        Some(value) => Ok(value),
    }
}

/// Input objects leave unset fields as `null`; drop them so they decode as
/// absent.
fn prune_nulls(value: Value) -> Value {
    match value {
        Value::Object(object) => Value::Object(
            object
                .into_iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key, prune_nulls(value)))
                .collect(),
        ),
        other => other,
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Number(_) | Value::String(_))
}
