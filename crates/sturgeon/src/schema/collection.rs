use super::{
    aggregation::key_value_type, boolean_query::boolean_args_type_name,
    document::document_type_name, Compiler, FieldDescriptor,
};
use crate::{
    engine::Engine,
    resolve::{AggregationResolver, ByIdResolver, Collection, ListResolver},
    Result,
};

use serde_json::Value;
use std::{sync::Arc, time::Instant};
use sturgeon_core::{
    schema::{Field, Scalar, TypeDef, TypeRef},
    CollectionMapping,
};

/// Everything one collection contributes to the root schema.
#[derive(Debug, Clone)]
pub struct CollectionSchema {
    /// Collection name in the store
    pub collection: String,

    /// Collection name in the typed query protocol
    pub name: String,

    pub fields: Vec<FieldDescriptor>,

    /// `<c>`, `<c>_by_id` and, when enabled, `<c>_aggregations`
    pub root_fields: Vec<Field>,

    /// Every named type the root fields refer to
    pub types: Vec<TypeDef>,
}

impl CollectionSchema {
    /// Compiles one collection's metadata and attaches its resolvers.
    ///
    /// Fails with `invalid_mapping` when the metadata has no field list.
    pub(crate) fn build(
        engine: &Engine,
        collection: &str,
        metadata: &Value,
    ) -> Result<CollectionSchema> {
        let mapping = CollectionMapping::from_metadata(collection, metadata)?;
        let compiler = Compiler::new(&engine.names, &engine.config);

        let name = engine.names.register(collection);
        let mut types = vec![];

        let start = Instant::now();
        let fields = compiler.fields(&mapping);
        types.push(TypeDef::from(compiler.document_type(&name, &fields)));
        tracing::info!(collection = %name, elapsed = ?start.elapsed(), "built document type");

        let target = Arc::new(Collection::new(collection, &name, &fields));
        let document = TypeRef::named(document_type_name(&name));

        // Input objects need at least one field, so a collection without
        // scalar fields gets no filter argument
        let boolean_query = if fields.is_empty() {
            None
        } else {
            let start = Instant::now();
            let boolean_types = compiler.boolean_query_types(&name, &fields);
            types.extend(boolean_types.into_types().map(TypeDef::from));
            tracing::info!(collection = %name, elapsed = ?start.elapsed(), "built boolean argument type");
            Some(TypeRef::named(boolean_args_type_name(&name)))
        };

        let mut list = Field::new(&name, TypeRef::list(document.clone()))
            .argument("size", TypeRef::non_null(Scalar::Int));
        if let Some(boolean_query) = &boolean_query {
            list = list.argument("boolean_query", boolean_query.clone());
        }

        let mut root_fields = vec![
            list.resolver(ListResolver::new(engine.clone(), target.clone())),
            Field::new(format!("{name}_by_id"), document)
                .argument("id", TypeRef::non_null(Scalar::Id))
                .resolver(ByIdResolver::new(engine.clone(), target.clone())),
        ];

        if let Some(boolean_query) = boolean_query.filter(|_| engine.config.enable_aggregations) {
            let start = Instant::now();
            let aggregation_types = compiler.aggregation_types(&name, &fields);
            let root = TypeRef::named(&aggregation_types.root.name);
            types.extend(aggregation_types.into_types().map(TypeDef::from));
            types.push(TypeDef::from(key_value_type()));
            tracing::info!(collection = %name, elapsed = ?start.elapsed(), "built document aggregation type");

            root_fields.push(
                Field::new(format!("{name}_aggregations"), root)
                    .argument("boolean_query", boolean_query)
                    .resolver(AggregationResolver::new(engine.clone(), target)),
            );
        }

        Ok(CollectionSchema {
            collection: collection.to_string(),
            name,
            fields,
            root_fields,
            types,
        })
    }
}
