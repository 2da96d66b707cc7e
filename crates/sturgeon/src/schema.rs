//! Compiles store metadata into the typed query surface.
//!
//! Nothing about the document shape is known ahead of time: every type is
//! derived at startup from the collection's live field metadata, with field
//! names made protocol-safe through the shared [`Names`] registry.

mod aggregation;
pub use aggregation::AggregationTypes;

mod boolean_query;
pub use boolean_query::BooleanQueryTypes;

mod builder;
pub(crate) use builder::build_schema;

mod collection;
pub use collection::CollectionSchema;

mod document;

mod field;
pub use field::FieldDescriptor;

use crate::Config;

use sturgeon_core::{mapping::FieldMapping, schema::Scalar, CollectionMapping, Names};

/// Shared type listing percentile results.
pub const KEY_VALUE: &str = "key_value";

pub struct Compiler<'a> {
    names: &'a Names,
    config: &'a Config,
}

impl<'a> Compiler<'a> {
    pub fn new(names: &'a Names, config: &'a Config) -> Compiler<'a> {
        Compiler { names, config }
    }

    /// Derives the scalar fields of a collection, registering each retained
    /// name.
    ///
    /// Fields under the ignore prefix, nested objects and store types with no
    /// scalar counterpart are skipped. Skipping is not an error.
    pub fn fields(&self, mapping: &CollectionMapping) -> Vec<FieldDescriptor> {
        let mut fields = Vec::with_capacity(mapping.len());

        for (name, field) in &mapping.fields {
            if self.config.is_ignored(name) {
                continue;
            }

            let kind = match field {
                FieldMapping::Leaf { kind } => kind,
                FieldMapping::Object(_) | FieldMapping::Unknown => {
                    tracing::debug!(field = %name, "skipping field without a scalar type");
                    continue;
                }
            };

            let scalar = match Scalar::from_store_type(kind) {
                Ok(scalar) => scalar,
                Err(err) => {
                    tracing::debug!(field = %name, error = %err, "skipping field");
                    continue;
                }
            };

            fields.push(FieldDescriptor {
                original: name.clone(),
                normalized: self.names.register(name),
                store_type: kind.clone(),
                scalar,
            });
        }

        fields
    }
}
