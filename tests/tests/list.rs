use pretty_assertions::assert_eq;
use serde_json::json;
use sturgeon::{Config, FieldRequest};
use sturgeon_core::query::SourceFilter;
use tests::{fixtures, select, setup};

#[tokio::test]
async fn lists_documents_with_normalized_fields() {
    let (db, _log) = setup(fixtures::es_index(), Config::new()).await;

    let value = db
        .resolve(
            FieldRequest::new("es_index")
                .arg("size", 2)
                .select(select(["plus_X_Temperature", "sensor", "id"])),
        )
        .await
        .unwrap();

    assert_eq!(
        value,
        json!([
            { "plus_X_Temperature": 10.0, "sensor": "alpha", "id": "a" },
            { "plus_X_Temperature": 20.0, "sensor": "beta", "id": "b" },
        ])
    );
}

#[tokio::test]
async fn requests_only_selected_fields() {
    let (db, log) = setup(fixtures::es_index(), Config::new()).await;

    db.resolve(
        FieldRequest::new("es_index")
            .arg("size", 10)
            .select(select(["timestamp", "count"])),
    )
    .await
    .unwrap();

    let search = log.last_search();
    assert_eq!(search.collection, "es-index");
    assert_eq!(search.size, 10);
    assert_eq!(
        search.source,
        SourceFilter::Includes(vec!["@timestamp".to_string(), "count".to_string()])
    );
}

#[tokio::test]
async fn id_is_attached_only_when_selected() {
    let (db, log) = setup(fixtures::es_index(), Config::new()).await;

    let without_id = db
        .resolve(FieldRequest::new("es_index").arg("size", 1).select(select(["count"])))
        .await
        .unwrap();
    assert_eq!(without_id, json!([{ "count": 1 }]));

    let only_id = db
        .resolve(FieldRequest::new("es_index").arg("size", 1).select(select(["id"])))
        .await
        .unwrap();
    assert_eq!(only_id, json!([{ "id": "a" }]));
    assert_eq!(log.last_search().source, SourceFilter::Disabled);
}

#[tokio::test]
async fn timestamps_are_decoded() {
    let (db, _log) = setup(fixtures::es_index(), Config::new()).await;

    let value = db
        .resolve(
            FieldRequest::new("es_index")
                .arg("size", 10)
                .select(select(["id", "timestamp"])),
        )
        .await
        .unwrap();

    assert_eq!(
        value,
        json!([
            { "timestamp": "2024-01-01T00:00:00Z", "id": "a" },
            { "timestamp": "2024-01-02T00:00:00Z", "id": "b" },
            { "timestamp": "2024-01-02T23:00:00Z", "id": "c" },
            // Undecodable dates are dropped, not fatal
            { "id": "d" },
        ])
    );
}

#[tokio::test]
async fn filter_uses_original_field_names() {
    let (db, log) = setup(fixtures::es_index(), Config::new()).await;

    let value = db
        .resolve(
            FieldRequest::new("es_index")
                .arg("size", 10)
                .arg(
                    "boolean_query",
                    json!({
                        "must": { "plus_X_Temperature": { "range": { "gte": 20, "lt": 40 } } },
                        "must_not": { "count": { "range": { "lte": 2 } } },
                    }),
                )
                .select(select(["id"])),
        )
        .await
        .unwrap();

    assert_eq!(value, json!([{ "id": "c" }]));

    assert_eq!(
        log.last_search().body()["query"],
        json!({
            "bool": {
                "must": [{ "range": { "+X Temperature": { "gte": 20, "lt": 40 } } }],
                "must_not": [{ "range": { "count": { "lte": 2 } } }],
            }
        })
    );
}

#[tokio::test]
async fn missing_filter_matches_everything() {
    let (db, log) = setup(fixtures::es_index(), Config::new()).await;

    let value = db
        .resolve(
            FieldRequest::new("es_index")
                .arg("size", 100)
                .arg("boolean_query", serde_json::Value::Null)
                .select(select(["id"])),
        )
        .await
        .unwrap();

    assert_eq!(value.as_array().unwrap().len(), 4);
    assert_eq!(log.last_search().body()["query"], json!({ "bool": {} }));
}

#[tokio::test]
async fn size_zero_returns_no_documents() {
    let (db, _log) = setup(fixtures::es_index(), Config::new()).await;

    let value = db
        .resolve(FieldRequest::new("es_index").arg("size", 0).select(select(["id"])))
        .await
        .unwrap();

    assert_eq!(value, json!([]));
}
