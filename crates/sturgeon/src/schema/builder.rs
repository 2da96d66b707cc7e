use super::CollectionSchema;
use crate::{engine::Engine, Error, Result};

use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::time::Instant;
use sturgeon_core::{
    schema::{ObjectType, TypeDef, ROOT_QUERY},
    Schema,
};
use tokio::task::JoinSet;

/// Builds the root schema from the metadata of every discovered collection.
///
/// Each collection compiles in its own task. A collection that fails to
/// compile is logged and left out; only an empty result is fatal.
pub(crate) async fn build_schema(engine: &Engine, metadata: Map<String, Value>) -> Result<Schema> {
    let start = Instant::now();
    let mut tasks = JoinSet::new();

    for (collection, metadata) in metadata {
        let engine = engine.clone();
        tasks.spawn(async move {
            let schema = CollectionSchema::build(&engine, &collection, &metadata);
            (collection, schema)
        });
    }

    let mut collections = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((_, Ok(schema))) => collections.push(schema),
            Ok((collection, Err(err))) => {
                tracing::warn!(collection = %collection, error = %err, "ignoring collection");
            }
            Err(err) => {
                tracing::error!(error = %err, "collection schema task failed");
            }
        }
    }

    // Completion order is arbitrary; sort so the printed schema is stable
    collections.sort_by(|a, b| a.name.cmp(&b.name));

    let mut query = ObjectType::new(ROOT_QUERY);
    let mut types = IndexMap::new();

    for collection in &collections {
        for field in &collection.root_fields {
            if query.get(&field.name).is_some() {
                tracing::warn!(field = %field.name, "root field defined twice; keeping the latest");
            }
            query.push(field.clone());
        }
        for ty in &collection.types {
            types.insert(ty.name().to_string(), ty.clone());
        }
    }

    if query.is_empty() {
        return Err(Error::no_valid_mappings());
    }

    tracing::info!(
        collections = collections.len(),
        fields = query.len(),
        elapsed = ?start.elapsed(),
        "built schema"
    );

    Ok(Schema::new(query, types))
}

