//! Canned collections shared by the integration tests.

use crate::MemoryDriver;

use serde_json::{json, Value};

/// Mapping metadata for a collection with the given `(field, type)` pairs.
pub fn mapping(fields: &[(&str, &str)]) -> Value {
    let properties: serde_json::Map<String, Value> = fields
        .iter()
        .map(|(name, ty)| (name.to_string(), json!({ "type": ty })))
        .collect();

    json!({ "mappings": { "properties": properties } })
}

/// `es-index`: sensor readings with awkward field names.
pub fn es_index() -> MemoryDriver {
    MemoryDriver::new()
        .collection(
            "es-index",
            mapping(&[
                ("@timestamp", "date"),
                ("+X Temperature", "float"),
                ("count", "long"),
                ("sensor", "string"),
                ("location", "geo_point"),
            ]),
        )
        .document(
            "es-index",
            "a",
            json!({
                "@timestamp": "2024-01-01T00:00:00Z",
                "+X Temperature": 10.0,
                "count": 1,
                "sensor": "alpha",
                "location": "51.5,0.1",
            }),
        )
        .document(
            "es-index",
            "b",
            json!({
                "@timestamp": "2024-01-02T00:00:00Z",
                "+X Temperature": 20.0,
                "count": 2,
                "sensor": "beta",
            }),
        )
        .document(
            "es-index",
            "c",
            json!({
                "@timestamp": "2024-01-03T00:00:00+01:00",
                "+X Temperature": 30.0,
                "count": 3,
                "sensor": "alpha",
            }),
        )
        .document(
            "es-index",
            "d",
            json!({
                "@timestamp": "garbage",
                "+X Temperature": 40.0,
                "count": 4,
                "sensor": "gamma",
            }),
        )
}
