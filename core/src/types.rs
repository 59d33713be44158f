//! Catalog entity model.
//!
//! # Design
//! Field names already match the upstream snake_case JSON keys, so serde needs
//! no renames. Decoding happens in two steps: the envelope is parsed with each
//! record kept as a raw `serde_json::Value`, then each record is decoded on its
//! own. That lets a bad envelope (`Decode`) be told apart from a bad record
//! (`MalformedRecord`) and lets the error name the offending index.
//!
//! These DTOs are defined independently from the mock-server crate;
//! integration tests catch schema drift.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Image CDN prefix for `w500` posters.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// One movie as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieEntity {
    pub id: u64,
    pub title: String,
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    pub release_date: String,
    pub vote_average: f64,
    pub genre_ids: Vec<u32>,
}

impl MovieEntity {
    /// Full poster URL, or `None` when the record carries no poster.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| format!("{POSTER_BASE_URL}{path}"))
    }
}

/// Top-level `{ "results": [...] }` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub results: Vec<MovieEntity>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    results: Vec<serde_json::Value>,
}

impl CatalogResponse {
    /// Decode a response body. Unknown envelope fields (`page`,
    /// `total_pages`, ...) are ignored.
    pub fn decode(body: &str) -> Result<Self> {
        let raw: RawEnvelope =
            serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))?;

        let results = raw
            .results
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value(value).map_err(|e| CatalogError::MalformedRecord {
                    index,
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<MovieEntity>>>()?;

        Ok(Self { results })
    }
}
