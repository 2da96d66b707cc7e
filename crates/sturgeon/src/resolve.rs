//! Resolvers attached to each collection's root fields.

mod aggregations;
pub(crate) use aggregations::AggregationResolver;

mod by_id;
pub(crate) use by_id::ByIdResolver;

mod list;
pub(crate) use list::ListResolver;

use crate::schema::FieldDescriptor;

use indexmap::IndexMap;
use sturgeon_core::schema::Scalar;

/// What a resolver knows about the collection it serves.
#[derive(Debug, Clone)]
pub(crate) struct Collection {
    /// Name in the store; every request targets this
    pub(crate) original: String,

    /// Name in the typed query protocol
    pub(crate) name: String,

    /// Scalar fields keyed by normalized name
    fields: IndexMap<String, FieldDescriptor>,
}

impl Collection {
    pub(crate) fn new(original: &str, name: &str, fields: &[FieldDescriptor]) -> Collection {
        Collection {
            original: original.to_string(),
            name: name.to_string(),
            fields: fields
                .iter()
                .map(|field| (field.normalized.clone(), field.clone()))
                .collect(),
        }
    }

    pub(crate) fn field(&self, normalized: &str) -> Option<&FieldDescriptor> {
        self.fields.get(normalized)
    }

    /// Returns `true` if the store field `original` holds dates.
    pub(crate) fn is_date(&self, original: &str) -> bool {
        self.fields
            .values()
            .any(|field| field.original == original && field.scalar == Scalar::DateTime)
    }
}
