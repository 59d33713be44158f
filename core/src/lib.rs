//! Movie catalog client core.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the
//! top-rated movie list without touching the network (host-does-IO pattern),
//! and holds the debounced title search over the fetched set.
//!
//! # Design
//! - `CatalogClient` is stateless; base URL, credential and language are
//!   injected through `ApiConfig`.
//! - The fetch is split into `build_top_rated` and `parse_top_rated`, so the
//!   I/O boundary is explicit.
//! - `SearchState` takes the current time as an argument and hands refetches
//!   back to its driver, so it runs unchanged under tokio or behind the FFI.
//! - Types use owned `String` / `Vec` fields to simplify FFI mapping.

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod genres;
pub mod http;
pub mod search;
pub mod types;

pub use client::CatalogClient;
pub use config::{ApiConfig, CatalogConfig, LoggingConfig, SearchConfig};
pub use display::{MovieCard, MovieDetail};
pub use error::{CatalogError, Result};
pub use genres::genre_name;
pub use http::{HttpRequest, HttpResponse};
pub use search::{filter_by_title, Debouncer, FilterMode, SearchAction, SearchSnapshot, SearchState};
pub use types::{CatalogResponse, MovieEntity, POSTER_BASE_URL};
