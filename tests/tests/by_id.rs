use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use sturgeon::{Config, FieldRequest};
use sturgeon_core::query::SourceFilter;
use tests::{fixtures, select, setup};

#[tokio::test]
async fn gets_one_document() {
    let (db, log) = setup(fixtures::es_index(), Config::new()).await;

    let value = db
        .resolve(
            FieldRequest::new("es_index_by_id")
                .arg("id", "b")
                .select(select(["id", "sensor", "timestamp"])),
        )
        .await
        .unwrap();

    assert_eq!(
        value,
        json!({ "id": "b", "sensor": "beta", "timestamp": "2024-01-02T00:00:00Z" })
    );

    let get = log.gets().pop().unwrap();
    assert_eq!(get.collection, "es-index");
    assert_eq!(get.id, "b");
    assert_eq!(
        get.source,
        SourceFilter::Includes(vec!["sensor".to_string(), "@timestamp".to_string()])
    );
}

#[tokio::test]
async fn missing_document_is_null() {
    let (db, _log) = setup(fixtures::es_index(), Config::new()).await;

    let value = db
        .resolve(
            FieldRequest::new("es_index_by_id")
                .arg("id", "nope")
                .select(select(["id"])),
        )
        .await
        .unwrap();

    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn id_only_fetches_no_source() {
    let (db, log) = setup(fixtures::es_index(), Config::new()).await;

    let value = db
        .resolve(
            FieldRequest::new("es_index_by_id")
                .arg("id", "a")
                .select(select(["id"])),
        )
        .await
        .unwrap();

    assert_eq!(value, json!({ "id": "a" }));
    assert_eq!(log.gets().pop().unwrap().source, SourceFilter::Disabled);
}

#[tokio::test]
async fn requires_an_id() {
    let (db, log) = setup(fixtures::es_index(), Config::new()).await;
    log.clear();

    let err = db
        .resolve(FieldRequest::new("es_index_by_id").select(select(["id"])))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "resolving `es_index_by_id`: invalid argument `id`: argument id not found"
    );
    assert!(log.is_empty());
}
