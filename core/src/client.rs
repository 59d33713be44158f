//! Stateless request builder and response parser for the catalog API.
//!
//! # Design
//! `CatalogClient` holds only its injected configuration and carries no
//! mutable state between calls. The top-rated fetch is split into
//! `build_top_rated`, which produces an `HttpRequest`, and `parse_top_rated`,
//! which consumes an `HttpResponse`. The caller executes the round-trip,
//! keeping this crate deterministic and free of I/O dependencies.

use crate::config::ApiConfig;
use crate::error::{CatalogError, Result};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CatalogResponse, MovieEntity};

/// Synchronous, stateless client for the catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    bearer_token: String,
    language: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, bearer_token: &str, language: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: bearer_token.to_string(),
            language: language.to_string(),
        }
    }

    pub fn from_config(api: &ApiConfig) -> Self {
        Self::new(&api.base_url, &api.bearer_token, &api.language)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_top_rated(&self) -> HttpRequest {
        let url = format!("{}/movie/top_rated?language={}", self.base_url, self.language);
        tracing::debug!(url = %url, "building top-rated request");
        HttpRequest {
            url,
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                (
                    "authorization".to_string(),
                    format!("Bearer {}", self.bearer_token),
                ),
            ],
        }
    }

    /// Turn a top-rated response into movies, in the order the API sent them.
    pub fn parse_top_rated(&self, response: HttpResponse) -> Result<Vec<MovieEntity>> {
        check_status(&response)?;
        if response.body.trim().is_empty() {
            return Err(CatalogError::EmptyResponse);
        }
        let envelope = CatalogResponse::decode(&response.body)?;
        tracing::debug!(count = envelope.results.len(), "decoded top-rated movies");
        Ok(envelope.results)
    }
}

/// Map non-2xx status codes to `CatalogError::HttpStatus`.
fn check_status(response: &HttpResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }
    Err(CatalogError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
