//! Store metadata as reported by the mapping API.
//!
//! A collection's metadata has the shape
//! `{ "mappings": { "properties": { <field>: <descriptor> } } }` where each
//! descriptor is either `{ "type": <kind> }` or a nested
//! `{ "properties": { .. } }` object.

use crate::{Error, Result};

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Field metadata for one collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionMapping {
    pub fields: IndexMap<String, FieldMapping>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldMapping {
    /// A leaf with a store type name, e.g. `float` or `date`.
    Leaf { kind: String },

    /// A nested object with its own properties.
    Object(CollectionMapping),

    /// Neither a `type` nor `properties` key was present.
    Unknown,
}

impl CollectionMapping {
    /// Decodes one collection's entry from the mapping API response.
    ///
    /// Fails with `invalid_mapping` when there is no `mappings.properties`
    /// object to read fields from.
    pub fn from_metadata(collection: &str, metadata: &Value) -> Result<CollectionMapping> {
        let mappings = metadata
            .get("mappings")
            .and_then(Value::as_object)
            .ok_or_else(|| {
                Error::invalid_mapping(collection, "metadata did not contain mappings")
            })?;

        let properties = mappings
            .get("properties")
            .and_then(Value::as_object)
            .ok_or_else(|| {
                Error::invalid_mapping(collection, "mapping did not contain properties")
            })?;

        Ok(CollectionMapping::from_properties(properties))
    }

    pub fn from_properties(properties: &Map<String, Value>) -> CollectionMapping {
        let fields = properties
            .iter()
            .map(|(name, descriptor)| (name.clone(), FieldMapping::from_descriptor(descriptor)))
            .collect();

        CollectionMapping { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldMapping {
    fn from_descriptor(descriptor: &Value) -> FieldMapping {
        if let Some(kind) = descriptor.get("type").and_then(Value::as_str) {
            return FieldMapping::Leaf {
                kind: kind.to_string(),
            };
        }

        match descriptor.get("properties").and_then(Value::as_object) {
            Some(properties) => FieldMapping::Object(CollectionMapping::from_properties(properties)),
            None => FieldMapping::Unknown,
        }
    }

    /// The store type name for leaf fields.
    pub fn kind(&self) -> Option<&str> {
        match self {
            FieldMapping::Leaf { kind } => Some(kind),
            _ => None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, FieldMapping::Object(_))
    }
}
