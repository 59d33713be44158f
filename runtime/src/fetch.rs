//! Async execution of the top-rated fetch.
//!
//! # Design
//! `Transport` is the I/O seam: it runs one `HttpRequest` and hands back an
//! `HttpResponse`, or `CatalogError::Transport` when no response arrived.
//! Status, empty-body and decode handling stay in `CatalogClient`, so every
//! transport classifies failures the same way. `MovieSource` is the seam the
//! search engine depends on, so engine tests swap in a scripted source.

use async_trait::async_trait;
use catalog_core::{
    ApiConfig, CatalogClient, CatalogError, HttpRequest, HttpResponse, MovieEntity, Result,
};

/// Executes a plain-data HTTP request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Something that can produce the top-rated movie list.
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn fetch_top_rated(&self) -> Result<Vec<MovieEntity>>;
}

/// `Transport` backed by a shared `reqwest::Client`. Uses reqwest's default
/// timeouts.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.client.get(&request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// `CatalogClient` paired with a transport: build, execute, parse.
#[derive(Debug, Clone)]
pub struct FetchClient<T = ReqwestTransport> {
    catalog: CatalogClient,
    transport: T,
}

impl<T: Transport> FetchClient<T> {
    pub fn new(catalog: CatalogClient, transport: T) -> Self {
        Self { catalog, transport }
    }
}

impl FetchClient<ReqwestTransport> {
    pub fn from_config(api: &ApiConfig) -> Self {
        Self::new(CatalogClient::from_config(api), ReqwestTransport::new())
    }
}

#[async_trait]
impl<T: Transport> MovieSource for FetchClient<T> {
    async fn fetch_top_rated(&self) -> Result<Vec<MovieEntity>> {
        let request = self.catalog.build_top_rated();
        tracing::debug!(url = %request.url, "fetching top-rated movies");
        let response = self.transport.execute(request).await?;
        self.catalog.parse_top_rated(response)
    }
}
