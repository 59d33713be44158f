//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! The core crate builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. Whoever executes the request (the tokio
//! runtime crate, a native mobile host behind the FFI, a test) owns the I/O.
//!
//! Every request this client issues is a `GET`, so the method is implied.
//! All fields are owned so values can cross FFI boundaries without lifetimes.

/// An HTTP `GET` request described as plain data.
///
/// Built by `CatalogClient::build_top_rated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the executor after the round-trip, then handed to
/// `CatalogClient::parse_top_rated`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
