use serde_json::json;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};
use sturgeon::{
    driver::{Driver, Operation, Response},
    Config, FieldRequest, Result, Sturgeon,
};
use sturgeon_core::async_trait;
use tests::{fixtures, select, setup, MemoryDriver};

#[tokio::test]
async fn missing_size_fails_only_that_field() {
    let (db, _log) = setup(fixtures::es_index(), Config::new()).await;

    let results = db
        .execute(vec![
            FieldRequest::new("es_index").select(select(["id"])),
            FieldRequest::new("es_index_by_id")
                .arg("id", "a")
                .select(select(["id"])),
        ])
        .await;

    assert_eq!(results.len(), 2);

    let err = results[0].as_ref().unwrap_err();
    assert_eq!(
        err.to_string(),
        "resolving `es_index`: invalid argument `size`: argument size not found"
    );

    assert_eq!(results[1].as_ref().unwrap(), &json!({ "id": "a" }));
}

#[tokio::test]
async fn malformed_filter_is_an_argument_error() {
    let (db, log) = setup(fixtures::es_index(), Config::new()).await;
    log.clear();

    let err = db
        .resolve(
            FieldRequest::new("es_index")
                .arg("size", 1)
                .arg("boolean_query", json!({ "must": { "count": { "exists": {} } } }))
                .select(select(["id"])),
        )
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("resolving `es_index`: invalid argument `boolean_query`"));
    assert!(log.is_empty());
}

#[tokio::test]
async fn unknown_root_field() {
    let (db, _log) = setup(fixtures::es_index(), Config::new()).await;

    let err = db
        .resolve(FieldRequest::new("nope").select(select(["id"])))
        .await
        .unwrap_err();

    assert!(err.is_invalid_argument());
}

/// Forwards to a memory store but fails searches as the cluster would.
#[derive(Debug)]
struct RejectingSearches(MemoryDriver);

#[async_trait]
impl Driver for RejectingSearches {
    async fn exec(&self, op: Operation) -> Result<Response> {
        if op.is_search() {
            return Err(sturgeon::Error::query_failed(
                400,
                Some("search_phase_execution_exception"),
                Some("all shards failed"),
            ));
        }
        self.0.exec(op).await
    }
}

#[tokio::test]
async fn store_errors_surface_per_field() {
    let db = Sturgeon::builder()
        .build(RejectingSearches(fixtures::es_index()))
        .await
        .unwrap();

    let results = db
        .execute(vec![
            FieldRequest::new("es_index").arg("size", 1).select(select(["id"])),
            FieldRequest::new("es_index_by_id")
                .arg("id", "c")
                .select(select(["count"])),
        ])
        .await;

    assert_eq!(
        results[0].as_ref().unwrap_err().to_string(),
        "resolving `es_index`: query failed: 400: search_phase_execution_exception: all shards failed"
    );
    assert_eq!(results[1].as_ref().unwrap(), &json!({ "count": 3 }));
}

/// Answers metadata at once but stalls every other request.
#[derive(Debug)]
struct Stalling(MemoryDriver);

#[async_trait]
impl Driver for Stalling {
    async fn exec(&self, op: Operation) -> Result<Response> {
        if !matches!(op, Operation::GetMappings(_)) {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
        self.0.exec(op).await
    }
}

#[tokio::test(start_paused = true)]
async fn request_deadline_is_honored() {
    let db = Sturgeon::builder()
        .build(Stalling(fixtures::es_index()))
        .await
        .unwrap();

    let err = db
        .resolve(
            FieldRequest::new("es_index")
                .arg("size", 1)
                .select(select(["id"]))
                .timeout(Duration::from_millis(50)),
        )
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "resolving `es_index`: deadline exceeded: search on `es-index`"
    );
}

#[tokio::test(start_paused = true)]
async fn configured_timeout_applies_without_deadline() {
    let db = Sturgeon::builder()
        .config(Config::new().request_timeout(Duration::from_millis(50)))
        .build(Stalling(fixtures::es_index()))
        .await
        .unwrap();

    let err = db
        .resolve(
            FieldRequest::new("es_index_by_id")
                .arg("id", "a")
                .select(select(["id"])),
        )
        .await
        .unwrap_err();

    assert!(err.to_string().ends_with("deadline exceeded: get_by_id on `es-index`"));
}

/// Answers the first metadata request, then stalls every later one.
#[derive(Debug)]
struct StallingRediscovery {
    inner: MemoryDriver,
    discovered: AtomicBool,
}

impl StallingRediscovery {
    fn new(inner: MemoryDriver) -> StallingRediscovery {
        StallingRediscovery {
            inner,
            discovered: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl Driver for StallingRediscovery {
    async fn exec(&self, op: Operation) -> Result<Response> {
        if matches!(op, Operation::GetMappings(_)) && self.discovered.swap(true, Ordering::SeqCst)
        {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
        self.inner.exec(op).await
    }
}

#[tokio::test(start_paused = true)]
async fn discovery_deadline_is_honored() {
    let driver = StallingRediscovery::new(fixtures::es_index());
    driver.discovered.store(true, Ordering::SeqCst);

    let err = Sturgeon::builder()
        .deadline(Instant::now() + Duration::from_millis(50))
        .build(driver)
        .await
        .unwrap_err();

    assert!(err.is_deadline_exceeded());
    assert_eq!(err.to_string(), "deadline exceeded: get_mappings on `*`");
}

#[tokio::test(start_paused = true)]
async fn rebuild_deadline_keeps_the_schema() {
    let mut db = Sturgeon::builder()
        .build(StallingRediscovery::new(fixtures::es_index()))
        .await
        .unwrap();
    let before = db.schema().clone();

    let err = db
        .rebuild_before(Instant::now() + Duration::from_millis(50))
        .await
        .unwrap_err();

    assert!(err.is_deadline_exceeded());
    assert!(Arc::ptr_eq(&before, db.schema()));
}

#[tokio::test]
async fn no_matching_collections_is_fatal() {
    let err = Sturgeon::builder()
        .config(Config::new().index_include_pattern("metrics-*"))
        .build(fixtures::es_index())
        .await
        .unwrap_err();

    assert!(err.is_no_valid_mappings());
}
