mod decode;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde_json::{json, Value};
use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};
use sturgeon_core::{
    async_trait,
    driver::{
        operation::{GetById, GetMappings, Search},
        Operation, Response,
    },
    query::SourceFilter,
    Driver, Error, Result,
};
use url::Url;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);
const MAX_IDLE_PER_HOST: usize = 10;

/// Driver for an Elasticsearch cluster reached over its REST API.
///
/// Requests rotate across the configured hosts. A failed request is not
/// retried on another host.
#[derive(Debug)]
pub struct Elasticsearch {
    client: Client,
    hosts: Vec<Url>,
    next: AtomicUsize,
}

impl Elasticsearch {
    /// Connects using a comma-separated list of `http` or `https` host URLs,
    /// e.g. `http://es1:9200,http://es2:9200`.
    pub fn connect(url: &str) -> Result<Self> {
        let hosts = url
            .split(',')
            .map(str::trim)
            .filter(|host| !host.is_empty())
            .map(parse_host)
            .collect::<Result<Vec<_>>>()?;

        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .pool_max_idle_per_host(MAX_IDLE_PER_HOST)
            .build()
            .map_err(Error::driver_operation_failed)?;

        Self::with_client(client, hosts)
    }

    /// Uses an already configured HTTP client.
    pub fn with_client(client: Client, hosts: Vec<Url>) -> Result<Self> {
        if hosts.is_empty() {
            return Err(Error::invalid_connection_url("no hosts given"));
        }

        Ok(Self {
            client,
            hosts,
            next: AtomicUsize::new(0),
        })
    }

    pub fn hosts(&self) -> &[Url] {
        &self.hosts
    }

    async fn get_mappings(&self, op: GetMappings) -> Result<Response> {
        let request = self.request(Method::GET, &[&op.pattern, "_mapping"])?;
        let (status, body) = self.send(request).await?;

        if !status.is_success() {
            return Err(decode::error(status.as_u16(), &body));
        }

        decode::mappings(body).map(Response::Mappings)
    }

    async fn search(&self, op: Search) -> Result<Response> {
        let request = self
            .request(Method::POST, &[&op.collection, "_search"])?
            .json(&op.body());
        let (status, body) = self.send(request).await?;

        if !status.is_success() {
            return Err(decode::error(status.as_u16(), &body));
        }

        decode::hits(body).map(Response::Hits)
    }

    async fn get_by_id(&self, op: GetById) -> Result<Response> {
        let mut request = self.request(Method::GET, &[&op.collection, "_doc", &op.id])?;

        request = match &op.source {
            SourceFilter::All => request,
            SourceFilter::Disabled => request.query(&[("_source", "false")]),
            SourceFilter::Includes(fields) => {
                request.query(&[("_source_includes", fields.join(","))])
            }
        };

        let (status, body) = self.send(request).await?;

        // A missing document is a 404 with `found: false`; a missing index
        // is a 404 with an error envelope
        if status == StatusCode::NOT_FOUND && body.get("found") == Some(&Value::Bool(false)) {
            return Ok(Response::Document(None));
        }

        if !status.is_success() {
            return Err(decode::error(status.as_u16(), &body));
        }

        decode::document(body).map(Response::Document)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = endpoint(self.host(), segments)?;
        tracing::debug!(%method, %url, "elasticsearch request");
        Ok(self.client.request(method, url))
    }

    async fn send(&self, request: RequestBuilder) -> Result<(StatusCode, Value)> {
        let response = request.send().await.map_err(Error::driver_operation_failed)?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(Error::driver_operation_failed)?;

        Ok((status, body(status, &bytes)?))
    }

    fn host(&self) -> &Url {
        let next = self.next.fetch_add(1, Ordering::Relaxed);
        &self.hosts[next % self.hosts.len()]
    }
}

#[async_trait]
impl Driver for Elasticsearch {
    async fn exec(&self, op: Operation) -> Result<Response> {
        match op {
            Operation::GetMappings(op) => self.get_mappings(op).await,
            Operation::GetById(op) => self.get_by_id(op).await,
            Operation::Search(op) => self.search(op).await,
        }
    }
}

/// Decodes a response body. Proxies in front of the cluster answer errors
/// in plain text; that text becomes the error reason.
fn body(status: StatusCode, bytes: &[u8]) -> Result<Value> {
    if bytes.is_empty() {
        return Ok(Value::Null);
    }

    match serde_json::from_slice(bytes) {
        Ok(body) => Ok(body),
        Err(_) if !status.is_success() => {
            let text = String::from_utf8_lossy(bytes).trim().to_string();
            tracing::debug!(%status, body = %text, "non-JSON error response");
            Ok(json!({ "error": text }))
        }
        Err(err) => Err(err.into()),
    }
}

fn parse_host(host: &str) -> Result<Url> {
    let url = Url::parse(host)
        .map_err(|err| Error::invalid_connection_url(format!("{host}: {err}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported scheme `{scheme}` in {host}"
        ))),
    }
}

/// Appends percent-encoded path segments to a host URL.
fn endpoint(host: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = host.clone();

    url.path_segments_mut()
        .map_err(|_| Error::invalid_connection_url(format!("{host} cannot be a base URL")))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}
