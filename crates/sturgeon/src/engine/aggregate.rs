//! Metric aggregation requests and their results.
//!
//! Every requested `(kind, field)` pair becomes one entry named
//! `<kind>_<field>` in a single search, so two kinds over the same field or
//! one kind over two fields never collide.

use super::mapper::{decode_date, format_date};
use crate::{resolve::Collection, schema::FieldDescriptor};

use serde_json::{Map, Number, Value};
use sturgeon_core::{
    query::{Aggregation, AggregationKind},
    schema::{Scalar, SelectionSet},
};

/// Fields requested per aggregation kind, in selection order.
pub(crate) type Requested<'a> = Vec<(AggregationKind, Vec<&'a FieldDescriptor>)>;

/// Reads the caller's selection on `<c>_aggregations`. Selected names that
/// are neither a known kind nor a field of the collection are ignored.
pub(crate) fn requested<'a>(collection: &'a Collection, selection: &SelectionSet) -> Requested<'a> {
    let mut requested: Requested<'a> = vec![];

    for selection in selection {
        let Some(kind) = AggregationKind::from_name(&selection.name) else {
            continue;
        };

        let mut fields: Vec<&FieldDescriptor> = vec![];
        for field in &selection.selection_set {
            if let Some(field) = collection.field(&field.name) {
                if !fields.iter().any(|f| f.original == field.original) {
                    fields.push(field);
                }
            }
        }

        match requested.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, existing)) => existing.extend(fields),
            None => requested.push((kind, fields)),
        }
    }

    requested
}

/// Builds one request entry per field for `kind`.
pub(crate) fn request(kind: AggregationKind, fields: &[&FieldDescriptor]) -> Vec<Aggregation> {
    fields
        .iter()
        .map(|field| Aggregation::new(kind, &field.original))
        .collect()
}

/// Extracts `kind` results for each field from the raw `aggregations`
/// object, keyed by normalized field name.
///
/// A field whose entry is missing or malformed is left out.
pub(crate) fn parse(
    raw: &Map<String, Value>,
    kind: AggregationKind,
    fields: &[&FieldDescriptor],
) -> Map<String, Value> {
    let mut results = Map::new();

    for field in fields {
        let name = Aggregation::new(kind, &field.original).name;

        let Some(entry) = raw.get(&name).and_then(Value::as_object) else {
            tracing::debug!(aggregation = %name, "aggregation missing from response");
            continue;
        };

        let value = match kind {
            AggregationKind::Percentiles => entry.get("values").and_then(percentiles),
            AggregationKind::Cardinality => entry.get("value").and_then(count),
            AggregationKind::Min
            | AggregationKind::Max
            | AggregationKind::Avg
            | AggregationKind::Sum => metric(entry, field.scalar),
        };

        match value {
            Some(value) => {
                results.insert(field.normalized.clone(), value);
            }
            None => {
                tracing::debug!(aggregation = %name, "malformed aggregation result");
            }
        }
    }

    results
}

/// A single-value metric, typed after the field's scalar. `null` (no
/// matching documents) stays `null`. `Int` fields always yield an integer,
/// truncating any fraction.
fn metric(entry: &Map<String, Value>, scalar: Scalar) -> Option<Value> {
    let value = entry.get("value")?;

    if value.is_null() {
        return Some(Value::Null);
    }

    let number = value.as_f64()?;

    match scalar {
        Scalar::DateTime => {
            let instant = entry
                .get("value_as_string")
                .and_then(decode_date)
                .or_else(|| decode_date(&Value::from(number as i64)))?;
            Some(Value::String(format_date(&instant)))
        }
        Scalar::Int if number.is_finite() => Some(Value::from(number.trunc() as i64)),
        _ => Number::from_f64(number).map(Value::Number).or(Some(Value::Null)),
    }
}

fn count(value: &Value) -> Option<Value> {
    if let Some(count) = value.as_u64() {
        return Some(Value::from(count));
    }

    let count = value.as_f64()?;
    (count.fract() == 0.0 && count >= 0.0).then(|| Value::from(count as u64))
}

/// Percentile results as `[{ key, value }]`. Accepts both the array shape
/// and the keyed object shape.
fn percentiles(values: &Value) -> Option<Value> {
    let pairs = match values {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                let key = item.get("key")?.as_f64()?;
                Some(key_value(key, item.get("value")))
            })
            .collect::<Option<Vec<_>>>()?,
        Value::Object(keyed) => keyed
            .iter()
            .map(|(key, value)| {
                let key = key.parse::<f64>().ok()?;
                Some(key_value(key, Some(value)))
            })
            .collect::<Option<Vec<_>>>()?,
        _ => return None,
    };

    Some(Value::Array(pairs))
}

fn key_value(key: f64, value: Option<&Value>) -> Value {
    let mut pair = Map::new();
    pair.insert("key".to_string(), Value::from(key));
    pair.insert(
        "value".to_string(),
        value
            .and_then(Value::as_f64)
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number),
    );
    Value::Object(pair)
}
