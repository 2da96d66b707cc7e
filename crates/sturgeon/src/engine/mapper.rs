use super::projection::{Projection, ID};
use crate::resolve::Collection;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use sturgeon_core::{driver::Hit, Names};

/// The store's conventional event-time field, always decoded as a date.
pub(crate) const TIMESTAMP: &str = "@timestamp";

/// Reshapes raw store documents into protocol records.
#[derive(Debug)]
pub(crate) struct Mapper<'a> {
    names: &'a Names,
    collection: &'a Collection,
}

impl<'a> Mapper<'a> {
    pub(crate) fn new(names: &'a Names, collection: &'a Collection) -> Mapper<'a> {
        Mapper { names, collection }
    }

    pub(crate) fn documents(&self, hits: Vec<Hit>, projection: &Projection) -> Vec<Value> {
        hits.into_iter()
            .map(|hit| self.document(hit, projection.include_id))
            .collect()
    }

    /// Source keys come out under their normalized names. Keys the registry
    /// does not know are dropped, as is any date value that fails to decode.
    pub(crate) fn document(&self, hit: Hit, include_id: bool) -> Value {
        let mut record = Map::with_capacity(hit.source.len() + 1);

        for (key, value) in hit.source {
            let Some(normalized) = self.names.to_normalized(&key) else {
                continue;
            };

            if !self.is_date(&key) {
                record.insert(normalized, value);
                continue;
            }

            match decode_date(&value) {
                Some(instant) => {
                    record.insert(normalized, Value::String(format_date(&instant)));
                }
                None => {
                    tracing::debug!(field = %key, value = %value, "dropping undecodable date");
                }
            }
        }

        if include_id {
            record.insert(ID.to_string(), Value::String(hit.id));
        }

        Value::Object(record)
    }

    fn is_date(&self, original: &str) -> bool {
        original == TIMESTAMP || self.collection.is_date(original)
    }
}

/// Decodes a stored date: RFC 3339 text, a date-time without offset (read
/// as UTC), a bare date, or epoch milliseconds as number or text.
pub(crate) fn decode_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => parse_date(text),
        Value::Number(millis) => millis.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

pub(crate) fn format_date(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }

    if let Ok(instant) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(instant.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|instant| instant.and_utc());
    }

    text.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis)
}
