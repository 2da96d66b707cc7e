//! Decoding of REST responses into driver responses.

use serde_json::{Map, Value};
use sturgeon_core::{
    driver::{Hit, SearchHits},
    Error, Result,
};

/// `GET <pattern>/_mapping`: collection name to metadata.
pub(crate) fn mappings(body: Value) -> Result<Map<String, Value>> {
    match body {
        Value::Object(mappings) => Ok(mappings),
        _ => Err(Error::invalid_response("mapping response is not an object")),
    }
}

/// `POST <index>/_search`
pub(crate) fn hits(mut body: Value) -> Result<SearchHits> {
    let raw_hits = match body.pointer_mut("/hits/hits").map(Value::take) {
        Some(Value::Array(hits)) => hits,
        Some(_) => return Err(Error::invalid_response("`hits.hits` is not an array")),
        None => return Err(Error::invalid_response("search response has no `hits.hits`")),
    };

    let hits = raw_hits.into_iter().map(hit).collect::<Result<Vec<_>>>()?;

    let aggregations = match body.get_mut("aggregations").map(Value::take) {
        Some(Value::Object(aggregations)) => aggregations,
        Some(Value::Null) | None => Map::new(),
        Some(_) => return Err(Error::invalid_response("`aggregations` is not an object")),
    };

    Ok(SearchHits { hits, aggregations })
}

/// `GET <index>/_doc/<id>`
pub(crate) fn document(body: Value) -> Result<Option<Hit>> {
    if body.get("found") == Some(&Value::Bool(false)) {
        return Ok(None);
    }

    hit(body).map(Some)
}

fn hit(mut raw: Value) -> Result<Hit> {
    let id = match raw.get_mut("_id").map(Value::take) {
        Some(Value::String(id)) => id,
        _ => return Err(Error::invalid_response("document has no `_id`")),
    };

    // `_source` is absent when source filtering disabled it
    let source = match raw.get_mut("_source").map(Value::take) {
        Some(Value::Object(source)) => source,
        Some(Value::Null) | None => Map::new(),
        Some(_) => return Err(Error::invalid_response("`_source` is not an object")),
    };

    Ok(Hit::new(id, source))
}

/// Builds an error from a non-success response.
///
/// The cluster answers `{"error": {"type": .., "reason": ..}, "status": ..}`;
/// older versions and proxies may send a bare string or nothing at all.
pub(crate) fn error(status: u16, body: &Value) -> Error {
    let error = body.get("error");

    let (ty, reason) = match error {
        Some(Value::Object(error)) => {
            // The root cause usually says more than the wrapping exception
            let cause = error
                .get("root_cause")
                .and_then(Value::as_array)
                .and_then(|causes| causes.first());

            let reason = error
                .get("reason")
                .and_then(Value::as_str)
                .or_else(|| cause.and_then(|c| c.get("reason")).and_then(Value::as_str));

            (error.get("type").and_then(Value::as_str), reason)
        }
        Some(Value::String(reason)) => (None, Some(reason.as_str())),
        _ => (None, None),
    };

    Error::query_failed(status, ty, reason)
}
