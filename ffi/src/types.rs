//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type with C-compatible fields: `*mut c_char`
//! instead of `String`, pointer plus length instead of `Vec`, and enums with
//! explicit discriminants. Arrays are handed out as boxed slices so they can
//! be rebuilt with their exact length when freed. Conversion helpers live
//! here to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::{c_void, CString};
use std::os::raw::c_char;
use std::time::{Duration, Instant};

use catalog_core::{CatalogError, HttpRequest, MovieEntity, SearchState};

/// Opaque handle to a `CatalogClient`.
pub struct FfiCatalogClient {
    pub(crate) inner: catalog_core::CatalogClient,
}

/// Opaque handle to a `SearchState` driven by the host's clock.
///
/// The host passes milliseconds from any fixed origin of its choosing;
/// they are measured from `epoch`, captured at creation.
pub struct FfiSearch {
    pub(crate) state: SearchState,
    pub(crate) epoch: Instant,
}

impl FfiSearch {
    pub(crate) fn at(&self, now_ms: u64) -> Instant {
        self.epoch + Duration::from_millis(now_ms)
    }

    pub(crate) fn millis_since_epoch(&self, instant: Instant) -> i64 {
        instant.saturating_duration_since(self.epoch).as_millis() as i64
    }
}

// ---------------------------------------------------------------------------
// Allocation helpers
// ---------------------------------------------------------------------------

/// Hand a string to C. Interior NULs yield an empty string.
pub(crate) fn c_string(s: impl Into<Vec<u8>>) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

pub(crate) fn c_string_opt(s: Option<String>) -> *mut c_char {
    s.map(c_string).unwrap_or(std::ptr::null_mut())
}

/// Reclaim a string produced by `c_string`. Null is ignored.
pub(crate) unsafe fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Hand a vector to C as a pointer to its first element, or null when empty.
pub(crate) fn into_raw_slice<T>(items: Vec<T>) -> *mut T {
    if items.is_empty() {
        return std::ptr::null_mut();
    }
    Box::into_raw(items.into_boxed_slice()) as *mut T
}

/// Reclaim a slice produced by `into_raw_slice`.
pub(crate) unsafe fn from_raw_slice<T>(ptr: *mut T, len: u32) -> Box<[T]> {
    if ptr.is_null() || len == 0 {
        return Box::new([]);
    }
    unsafe { Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, len as usize)) }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP `GET` request described as C-compatible plain data.
///
/// Built by `catalog_build_top_rated`. The host executes it and passes the
/// response back through `catalog_parse_top_rated` or
/// `catalog_search_apply_response`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: HttpRequest) -> *mut Self {
        let headers_len = req.headers.len() as u32;
        let headers = into_raw_slice(
            req.headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: c_string(k),
                    value: c_string(v),
                })
                .collect(),
        );
        Box::into_raw(Box::new(FfiHttpRequest {
            url: c_string(req.url),
            headers,
            headers_len,
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The host builds this after executing a request and passes a pointer to a
/// parse function. A null `body` means the response had no body. The FFI
/// layer reads but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiCatalogResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    Transport = 1,
    EmptyResponse = 2,
    HttpStatus = 3,
    Decode = 4,
    MalformedRecord = 5,
    Config = 6,
    Panic = 7,
    NullArg = 8,
}

/// Tag that tells `catalog_free_result` what `FfiCatalogResult::data` points to.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiDataTag {
    None = 0,
    MovieList = 1,
}

/// What the host must do after `catalog_search_poll`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiSearchAction {
    /// Nothing due yet.
    None = 0,
    /// The query was cleared: fetch and call `catalog_search_apply_response`.
    Fetch = 1,
    /// A filter pass ran; re-read `catalog_search_visible`.
    Filtered = 2,
}

/// A single movie exposed to C. `poster_path` and `poster_url` may be null.
#[repr(C)]
pub struct FfiMovie {
    pub id: u64,
    pub title: *mut c_char,
    pub overview: *mut c_char,
    pub poster_path: *mut c_char,
    pub poster_url: *mut c_char,
    pub release_date: *mut c_char,
    pub vote_average: f64,
    pub genre_ids: *mut u32,
    pub genre_ids_len: u32,
}

impl FfiMovie {
    pub(crate) fn from_core(movie: &MovieEntity) -> Self {
        FfiMovie {
            id: movie.id,
            title: c_string(movie.title.clone()),
            overview: c_string(movie.overview.clone()),
            poster_path: c_string_opt(movie.poster_path.clone()),
            poster_url: c_string_opt(movie.poster_url()),
            release_date: c_string(movie.release_date.clone()),
            vote_average: movie.vote_average,
            genre_ids_len: movie.genre_ids.len() as u32,
            genre_ids: into_raw_slice(movie.genre_ids.clone()),
        }
    }

    /// Free the owned fields (but not the struct itself).
    pub(crate) unsafe fn free_fields(&self) {
        unsafe {
            free_c_string(self.title);
            free_c_string(self.overview);
            free_c_string(self.poster_path);
            free_c_string(self.poster_url);
            free_c_string(self.release_date);
            drop(from_raw_slice(self.genre_ids, self.genre_ids_len));
        }
    }
}

/// A list of movies exposed to C.
#[repr(C)]
pub struct FfiMovieList {
    pub items: *mut FfiMovie,
    pub len: u32,
}

/// Result envelope for parse and search read operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the payload tagged by `data_tag`. On failure `error_code`
/// names the category, `error_message` is a human-readable C string and
/// `data` is null.
#[repr(C)]
pub struct FfiCatalogResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut c_void,
}

impl FfiCatalogResult {
    /// Build a success result carrying an `FfiMovieList`.
    pub(crate) fn ok_movie_list(movies: &[MovieEntity]) -> *mut Self {
        let ffi_movies: Vec<FfiMovie> = movies.iter().map(FfiMovie::from_core).collect();
        let list = Box::new(FfiMovieList {
            len: ffi_movies.len() as u32,
            items: into_raw_slice(ffi_movies),
        });
        Box::into_raw(Box::new(FfiCatalogResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::MovieList,
            data: Box::into_raw(list) as *mut c_void,
        }))
    }

    /// Build an error result from a `CatalogError`.
    pub(crate) fn from_error(err: &CatalogError) -> *mut Self {
        let (error_code, http_status) = match err {
            CatalogError::Transport(_) => (FfiErrorCode::Transport, 0),
            CatalogError::EmptyResponse => (FfiErrorCode::EmptyResponse, 0),
            CatalogError::HttpStatus { status, .. } => (FfiErrorCode::HttpStatus, *status),
            CatalogError::Decode(_) => (FfiErrorCode::Decode, 0),
            CatalogError::MalformedRecord { .. } => (FfiErrorCode::MalformedRecord, 0),
            CatalogError::Config(_) => (FfiErrorCode::Config, 0),
        };
        Self::error(error_code, http_status, &err.to_string())
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::error(FfiErrorCode::NullArg, 0, &format!("null argument: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::error(FfiErrorCode::Panic, 0, msg)
    }

    fn error(error_code: FfiErrorCode, http_status: u16, msg: &str) -> *mut Self {
        Box::into_raw(Box::new(FfiCatalogResult {
            error_code,
            error_message: c_string(msg),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }))
    }
}
