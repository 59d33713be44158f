//! Async runtime for the movie catalog client.
//!
//! # Overview
//! Executes the requests `catalog-core` builds (reqwest on tokio) and runs
//! the debounced search as an actor task whose snapshots a presentation
//! layer renders.
//!
//! # Design
//! - `fetch` holds the I/O seams: `Transport` (one HTTP round-trip) and
//!   `MovieSource` (one top-rated fetch).
//! - `engine` owns all search state on a single task; callers only send
//!   commands and read snapshots.
//! - `observability` installs the tracing subscriber for binaries.

pub mod engine;
pub mod fetch;
pub mod observability;

pub use engine::{EngineSettings, SearchEngine};
pub use fetch::{FetchClient, MovieSource, ReqwestTransport, Transport};
pub use observability::init_tracing;
