//! C-ABI wrapper around `catalog-core`.
//!
//! # Overview
//! Exposes the catalog client and the debounced search through `extern "C"`
//! functions, so a native mobile host can build the top-rated request,
//! execute it with its own HTTP stack, parse the response, and drive the
//! search state machine from its own run loop and clock.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - One `FfiCatalogResult` envelope with `FfiDataTag` + `void* data`
//!   conveys movie lists and errors uniformly.
//! - Search time is host-supplied milliseconds; the host schedules its own
//!   timer from `catalog_search_deadline_ms` and calls `catalog_search_poll`.
//! - The C caller owns all returned pointers and must call the matching
//!   `catalog_free_*` function to release them.

pub mod types;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::catch_unwind;
use std::str::Utf8Error;
use std::time::{Duration, Instant};

use catalog_core::{CatalogError, FilterMode, HttpResponse, SearchAction, SearchState};

use types::*;

/// Borrow a C string as `&str`.
unsafe fn str_arg<'a>(s: *const c_char) -> Result<&'a str, Utf8Error> {
    unsafe { CStr::from_ptr(s) }.to_str()
}

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a `CatalogClient` for `base_url`, authenticating with
/// `bearer_token` and requesting `language`.
///
/// Returns null if any argument is null or not UTF-8, or if an internal
/// panic occurs. The caller must free the returned pointer with
/// `catalog_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn catalog_client_new(
    base_url: *const c_char,
    bearer_token: *const c_char,
    language: *const c_char,
) -> *mut FfiCatalogClient {
    catch_unwind(|| {
        if base_url.is_null() || bearer_token.is_null() || language.is_null() {
            return std::ptr::null_mut();
        }
        let args = unsafe { (str_arg(base_url), str_arg(bearer_token), str_arg(language)) };
        let (Ok(base_url), Ok(bearer_token), Ok(language)) = args else {
            return std::ptr::null_mut();
        };
        let client = catalog_core::CatalogClient::new(base_url, bearer_token, language);
        Box::into_raw(Box::new(FfiCatalogClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `catalog_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn catalog_client_free(client: *mut FfiCatalogClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

/// Build the top-rated `GET` request.
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `catalog_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn catalog_build_top_rated(client: *const FfiCatalogClient) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiHttpRequest::from_core(client.inner.build_top_rated())
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null body becomes
/// an empty one, which parses as `EmptyResponse`; a body that is not UTF-8
/// is a `Decode` error.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> Result<HttpResponse, CatalogError> {
    let body = if resp.body.is_null() {
        String::new()
    } else {
        unsafe { str_arg(resp.body) }
            .map_err(|e| CatalogError::Decode(format!("response body is not UTF-8: {e}")))?
            .to_string()
    };
    Ok(HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body,
    })
}

/// Parse a top-rated response.
///
/// Returns a result with `data_tag = MovieList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn catalog_parse_top_rated(
    client: *const FfiCatalogClient,
    response: *const FfiHttpResponse,
) -> *mut FfiCatalogResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiCatalogResult::null_arg("client");
        }
        if response.is_null() {
            return FfiCatalogResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let parsed = ffi_response_to_core(unsafe { &*response })
            .and_then(|resp| client.inner.parse_top_rated(resp));
        match parsed {
            Ok(movies) => FfiCatalogResult::ok_movie_list(&movies),
            Err(e) => FfiCatalogResult::from_error(&e),
        }
    })
    .unwrap_or_else(|_| FfiCatalogResult::panic("panic in catalog_parse_top_rated"))
}

/// Display label for a genre id, or "Unknown".
///
/// The caller must free the returned string with `catalog_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn catalog_genre_name(genre_id: u32) -> *mut c_char {
    catch_unwind(|| c_string(catalog_core::genre_name(genre_id))).unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Create a search state with a `debounce_ms` quiet period. `destructive`
/// selects the filter mode that overwrites the fetched set with matches.
///
/// The caller must free the returned pointer with `catalog_search_free`.
#[unsafe(no_mangle)]
pub extern "C" fn catalog_search_new(debounce_ms: u64, destructive: bool) -> *mut FfiSearch {
    catch_unwind(|| {
        let mode = if destructive {
            FilterMode::Destructive
        } else {
            FilterMode::Separate
        };
        Box::into_raw(Box::new(FfiSearch {
            state: SearchState::new(Duration::from_millis(debounce_ms), mode),
            epoch: Instant::now(),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a search state created by `catalog_search_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn catalog_search_free(search: *mut FfiSearch) {
    if !search.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(search) });
        });
    }
}

/// Record a query update at host time `now_ms`.
///
/// Returns false, leaving the state untouched, if `search` or `query` is
/// null or `query` is not UTF-8.
#[unsafe(no_mangle)]
pub extern "C" fn catalog_search_set_query(
    search: *mut FfiSearch,
    query: *const c_char,
    now_ms: u64,
) -> bool {
    catch_unwind(|| {
        if search.is_null() || query.is_null() {
            return false;
        }
        let Ok(query) = (unsafe { str_arg(query) }) else {
            return false;
        };
        let search = unsafe { &mut *search };
        let now = search.at(now_ms);
        search.state.set_query(query, now);
        true
    })
    .unwrap_or(false)
}

/// Act on the pending query if its quiet period has elapsed by `now_ms`.
#[unsafe(no_mangle)]
pub extern "C" fn catalog_search_poll(search: *mut FfiSearch, now_ms: u64) -> FfiSearchAction {
    catch_unwind(|| {
        if search.is_null() {
            return FfiSearchAction::None;
        }
        let search = unsafe { &mut *search };
        let now = search.at(now_ms);
        match search.state.poll(now) {
            None => FfiSearchAction::None,
            Some(SearchAction::Fetch) => FfiSearchAction::Fetch,
            Some(SearchAction::Filtered { .. }) => FfiSearchAction::Filtered,
        }
    })
    .unwrap_or(FfiSearchAction::None)
}

/// Host time at which `catalog_search_poll` should next be called, or -1 when
/// no query is pending.
#[unsafe(no_mangle)]
pub extern "C" fn catalog_search_deadline_ms(search: *const FfiSearch) -> i64 {
    catch_unwind(|| {
        if search.is_null() {
            return -1;
        }
        let search = unsafe { &*search };
        search
            .state
            .deadline()
            .map(|deadline| search.millis_since_epoch(deadline))
            .unwrap_or(-1)
    })
    .unwrap_or(-1)
}

/// Parse a top-rated response and apply it to the search state.
///
/// On success the movie set is replaced and the result carries the new
/// visible list. On failure the set is left unchanged and the error is
/// returned.
#[unsafe(no_mangle)]
pub extern "C" fn catalog_search_apply_response(
    search: *mut FfiSearch,
    client: *const FfiCatalogClient,
    response: *const FfiHttpResponse,
) -> *mut FfiCatalogResult {
    catch_unwind(|| {
        if search.is_null() {
            return FfiCatalogResult::null_arg("search");
        }
        if client.is_null() {
            return FfiCatalogResult::null_arg("client");
        }
        if response.is_null() {
            return FfiCatalogResult::null_arg("response");
        }
        let search = unsafe { &mut *search };
        let client = unsafe { &*client };
        let parsed = ffi_response_to_core(unsafe { &*response })
            .and_then(|resp| client.inner.parse_top_rated(resp));
        let failure: Option<CatalogError> = parsed.as_ref().err().cloned();
        search.state.apply_fetch(parsed);
        match failure {
            None => FfiCatalogResult::ok_movie_list(search.state.visible()),
            Some(e) => FfiCatalogResult::from_error(&e),
        }
    })
    .unwrap_or_else(|_| FfiCatalogResult::panic("panic in catalog_search_apply_response"))
}

/// Copy the currently visible movies.
///
/// Returns a result with `data_tag = MovieList`.
#[unsafe(no_mangle)]
pub extern "C" fn catalog_search_visible(search: *const FfiSearch) -> *mut FfiCatalogResult {
    catch_unwind(|| {
        if search.is_null() {
            return FfiCatalogResult::null_arg("search");
        }
        let search = unsafe { &*search };
        FfiCatalogResult::ok_movie_list(search.state.visible())
    })
    .unwrap_or_else(|_| FfiCatalogResult::panic("panic in catalog_search_visible"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by `catalog_build_top_rated`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn catalog_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        unsafe {
            free_c_string(req.url);
            for header in from_raw_slice(req.headers, req.headers_len).iter() {
                free_c_string(header.key);
                free_c_string(header.value);
            }
        }
    });
}

/// Free an `FfiCatalogResult`. Safe to call with null. Uses `data_tag` to
/// determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn catalog_free_result(result: *mut FfiCatalogResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        unsafe { free_c_string(result.error_message) };
        if result.data.is_null() {
            return;
        }
        match result.data_tag {
            FfiDataTag::MovieList => {
                let list = unsafe { Box::from_raw(result.data as *mut FfiMovieList) };
                let items = unsafe { from_raw_slice(list.items, list.len) };
                for movie in items.iter() {
                    unsafe { movie.free_fields() };
                }
            }
            FfiDataTag::None => {}
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn catalog_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| unsafe { free_c_string(s) });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    const BODY: &str = r#"{"results":[
        {"id":1,"title":"Dune","overview":"Arrakis","poster_path":"/dune.jpg",
         "release_date":"2021-09-15","vote_average":7.8,"genre_ids":[878,12]},
        {"id":2,"title":"Dune Two","overview":"","poster_path":null,
         "release_date":"2024-02-27","vote_average":8.2,"genre_ids":[]},
        {"id":3,"title":"Alien","overview":"","poster_path":"/alien.jpg",
         "release_date":"1979-05-25","vote_average":8.1,"genre_ids":[27,878]}
    ]}"#;

    fn new_client() -> *mut FfiCatalogClient {
        let url = CString::new("http://localhost:3000").unwrap();
        let token = CString::new("tok").unwrap();
        let lang = CString::new("es-ES").unwrap();
        catalog_client_new(url.as_ptr(), token.as_ptr(), lang.as_ptr())
    }

    fn read(s: *const c_char) -> String {
        unsafe { CStr::from_ptr(s) }.to_str().unwrap().to_string()
    }

    fn movie_titles(result: *mut FfiCatalogResult) -> Vec<String> {
        let result = unsafe { &*result };
        assert_eq!(result.error_code, FfiErrorCode::Ok);
        assert_eq!(result.data_tag, FfiDataTag::MovieList);
        let list = unsafe { &*(result.data as *const FfiMovieList) };
        if list.len == 0 {
            return Vec::new();
        }
        let items = unsafe { std::slice::from_raw_parts(list.items, list.len as usize) };
        items.iter().map(|m| read(m.title)).collect()
    }

    fn apply(
        search: *mut FfiSearch,
        client: *mut FfiCatalogClient,
        status: u16,
        body: &str,
    ) -> *mut FfiCatalogResult {
        let body = CString::new(body).unwrap();
        let resp = FfiHttpResponse {
            status,
            body: body.as_ptr(),
        };
        catalog_search_apply_response(search, client, &resp)
    }

    #[test]
    fn client_new_and_free() {
        let client = new_client();
        assert!(!client.is_null());
        catalog_client_free(client);
    }

    #[test]
    fn client_new_null_returns_null() {
        let url = CString::new("http://localhost:3000").unwrap();
        let client = catalog_client_new(url.as_ptr(), std::ptr::null(), std::ptr::null());
        assert!(client.is_null());
    }

    #[test]
    fn client_free_null_is_safe() {
        catalog_client_free(std::ptr::null_mut());
    }

    #[test]
    fn build_top_rated_returns_correct_request() {
        let client = new_client();
        let req = catalog_build_top_rated(client);
        assert!(!req.is_null());

        let req_ref = unsafe { &*req };
        assert_eq!(
            read(req_ref.url),
            "http://localhost:3000/movie/top_rated?language=es-ES"
        );
        assert_eq!(req_ref.headers_len, 2);
        let headers = unsafe { std::slice::from_raw_parts(req_ref.headers, 2) };
        assert_eq!(read(headers[0].key), "content-type");
        assert_eq!(read(headers[0].value), "application/json");
        assert_eq!(read(headers[1].key), "authorization");
        assert_eq!(read(headers[1].value), "Bearer tok");

        catalog_free_request(req);
        catalog_client_free(client);
    }

    #[test]
    fn build_top_rated_null_client_returns_null() {
        assert!(catalog_build_top_rated(std::ptr::null()).is_null());
    }

    #[test]
    fn parse_top_rated_success() {
        let client = new_client();
        let body = CString::new(BODY).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = catalog_parse_top_rated(client, &resp);
        assert_eq!(movie_titles(result), vec!["Dune", "Dune Two", "Alien"]);

        let list = unsafe { &*((*result).data as *const FfiMovieList) };
        let items = unsafe { std::slice::from_raw_parts(list.items, 3) };
        assert_eq!(items[0].id, 1);
        assert_eq!(read(items[0].poster_url), "https://image.tmdb.org/t/p/w500/dune.jpg");
        assert_eq!(items[0].genre_ids_len, 2);
        let genres = unsafe { std::slice::from_raw_parts(items[0].genre_ids, 2) };
        assert_eq!(genres, &[878, 12]);
        assert!(items[1].poster_path.is_null());
        assert!(items[1].poster_url.is_null());
        assert!(items[1].genre_ids.is_null());

        catalog_free_result(result);
        catalog_client_free(client);
    }

    #[test]
    fn parse_top_rated_null_body_is_empty_response() {
        let client = new_client();
        let resp = FfiHttpResponse {
            status: 200,
            body: std::ptr::null(),
        };
        let result = catalog_parse_top_rated(client, &resp);
        let result_ref = unsafe { &*result };
        assert_eq!(result_ref.error_code, FfiErrorCode::EmptyResponse);
        assert!(result_ref.data.is_null());
        assert_eq!(read(result_ref.error_message), "empty response body");

        catalog_free_result(result);
        catalog_client_free(client);
    }

    #[test]
    fn parse_top_rated_unauthorized_carries_status() {
        let client = new_client();
        let body = CString::new(r#"{"status_code":7}"#).unwrap();
        let resp = FfiHttpResponse {
            status: 401,
            body: body.as_ptr(),
        };
        let result = catalog_parse_top_rated(client, &resp);
        let result_ref = unsafe { &*result };
        assert_eq!(result_ref.error_code, FfiErrorCode::HttpStatus);
        assert_eq!(result_ref.http_status, 401);

        catalog_free_result(result);
        catalog_client_free(client);
    }

    #[test]
    fn parse_top_rated_malformed_record() {
        let client = new_client();
        let body = CString::new(r#"{"results":[{"id":1}]}"#).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = catalog_parse_top_rated(client, &resp);
        assert_eq!(unsafe { &*result }.error_code, FfiErrorCode::MalformedRecord);

        catalog_free_result(result);
        catalog_client_free(client);
    }

    #[test]
    fn parse_top_rated_non_utf8_body_is_decode_error() {
        let client = new_client();
        let body = CString::new(vec![0xff, 0xfe, b'{']).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = catalog_parse_top_rated(client, &resp);
        let result_ref = unsafe { &*result };
        assert_eq!(result_ref.error_code, FfiErrorCode::Decode);
        assert!(result_ref.data.is_null());

        catalog_free_result(result);
        catalog_client_free(client);
    }

    #[test]
    fn client_new_non_utf8_returns_null() {
        let url = CString::new("http://localhost:3000").unwrap();
        let token = CString::new(vec![0xff, 0xfe]).unwrap();
        let lang = CString::new("es-ES").unwrap();
        let client = catalog_client_new(url.as_ptr(), token.as_ptr(), lang.as_ptr());
        assert!(client.is_null());
    }

    #[test]
    fn parse_top_rated_null_args() {
        let result = catalog_parse_top_rated(std::ptr::null(), std::ptr::null());
        let result_ref = unsafe { &*result };
        assert_eq!(result_ref.error_code, FfiErrorCode::NullArg);
        assert_eq!(read(result_ref.error_message), "null argument: client");
        catalog_free_result(result);
    }

    #[test]
    fn genre_name_known_and_unknown() {
        let action = catalog_genre_name(28);
        assert_eq!(read(action), "Action");
        catalog_free_string(action);

        let unknown = catalog_genre_name(99999);
        assert_eq!(read(unknown), "Unknown");
        catalog_free_string(unknown);
    }

    #[test]
    fn search_debounces_and_filters() {
        let client = new_client();
        let search = catalog_search_new(500, false);
        let loaded = apply(search, client, 200, BODY);
        assert_eq!(movie_titles(loaded).len(), 3);
        catalog_free_result(loaded);

        assert_eq!(catalog_search_deadline_ms(search), -1);
        for (i, q) in ["d", "du", "dun", "dune"].iter().enumerate() {
            let q = CString::new(*q).unwrap();
            assert!(catalog_search_set_query(search, q.as_ptr(), 1_000 + 30 * i as u64));
        }
        assert_eq!(catalog_search_deadline_ms(search), 1_590);
        assert_eq!(catalog_search_poll(search, 1_589), FfiSearchAction::None);
        assert_eq!(catalog_search_poll(search, 1_590), FfiSearchAction::Filtered);
        assert_eq!(catalog_search_poll(search, 3_000), FfiSearchAction::None);

        let visible = catalog_search_visible(search);
        assert_eq!(movie_titles(visible), vec!["Dune", "Dune Two"]);
        catalog_free_result(visible);

        catalog_search_free(search);
        catalog_client_free(client);
    }

    #[test]
    fn search_empty_query_asks_host_to_fetch() {
        let client = new_client();
        let search = catalog_search_new(500, false);
        catalog_free_result(apply(search, client, 200, BODY));

        let empty = CString::new("").unwrap();
        catalog_search_set_query(search, empty.as_ptr(), 0);
        assert_eq!(catalog_search_poll(search, 500), FfiSearchAction::Fetch);

        catalog_search_free(search);
        catalog_client_free(client);
    }

    #[test]
    fn search_failed_response_keeps_visible() {
        let client = new_client();
        let search = catalog_search_new(500, false);
        catalog_free_result(apply(search, client, 200, BODY));

        let failed = apply(search, client, 200, "");
        assert_eq!(unsafe { &*failed }.error_code, FfiErrorCode::EmptyResponse);
        catalog_free_result(failed);

        let visible = catalog_search_visible(search);
        assert_eq!(movie_titles(visible).len(), 3);
        catalog_free_result(visible);

        catalog_search_free(search);
        catalog_client_free(client);
    }

    #[test]
    fn search_non_utf8_response_is_decode_error_and_keeps_visible() {
        let client = new_client();
        let search = catalog_search_new(500, false);
        catalog_free_result(apply(search, client, 200, BODY));

        let body = CString::new(vec![0xff, 0xfe, b'{']).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let failed = catalog_search_apply_response(search, client, &resp);
        assert_eq!(unsafe { &*failed }.error_code, FfiErrorCode::Decode);
        catalog_free_result(failed);

        let visible = catalog_search_visible(search);
        assert_eq!(movie_titles(visible).len(), 3);
        catalog_free_result(visible);

        catalog_search_free(search);
        catalog_client_free(client);
    }

    #[test]
    fn search_rejects_non_utf8_query() {
        let client = new_client();
        let search = catalog_search_new(500, false);
        catalog_free_result(apply(search, client, 200, BODY));

        let dune = CString::new("dune").unwrap();
        assert!(catalog_search_set_query(search, dune.as_ptr(), 0));
        assert_eq!(catalog_search_poll(search, 500), FfiSearchAction::Filtered);

        let garbage = CString::new(vec![0xff, 0xfe]).unwrap();
        assert!(!catalog_search_set_query(search, garbage.as_ptr(), 1_000));
        assert_eq!(catalog_search_deadline_ms(search), -1);
        assert_eq!(catalog_search_poll(search, 5_000), FfiSearchAction::None);

        let visible = catalog_search_visible(search);
        assert_eq!(movie_titles(visible), vec!["Dune", "Dune Two"]);
        catalog_free_result(visible);

        catalog_search_free(search);
        catalog_client_free(client);
    }

    #[test]
    fn search_refetch_keeps_active_filter() {
        let client = new_client();
        let search = catalog_search_new(500, false);
        catalog_free_result(apply(search, client, 200, BODY));

        let alien = CString::new("alien").unwrap();
        catalog_search_set_query(search, alien.as_ptr(), 0);
        assert_eq!(catalog_search_poll(search, 500), FfiSearchAction::Filtered);

        let reloaded = apply(search, client, 200, BODY);
        assert_eq!(movie_titles(reloaded), vec!["Alien"]);
        catalog_free_result(reloaded);

        catalog_search_free(search);
        catalog_client_free(client);
    }

    #[test]
    fn search_destructive_mode_shrinks_set() {
        let client = new_client();
        let search = catalog_search_new(0, true);
        catalog_free_result(apply(search, client, 200, BODY));

        let narrow = CString::new("dune two").unwrap();
        catalog_search_set_query(search, narrow.as_ptr(), 0);
        assert_eq!(catalog_search_poll(search, 0), FfiSearchAction::Filtered);
        let wider = CString::new("dune").unwrap();
        catalog_search_set_query(search, wider.as_ptr(), 10);
        assert_eq!(catalog_search_poll(search, 10), FfiSearchAction::Filtered);

        let visible = catalog_search_visible(search);
        assert_eq!(movie_titles(visible), vec!["Dune Two"]);
        catalog_free_result(visible);

        catalog_search_free(search);
        catalog_client_free(client);
    }

    #[test]
    fn search_null_handles_are_safe() {
        catalog_search_free(std::ptr::null_mut());
        assert!(!catalog_search_set_query(std::ptr::null_mut(), std::ptr::null(), 0));
        assert_eq!(catalog_search_poll(std::ptr::null_mut(), 0), FfiSearchAction::None);
        assert_eq!(catalog_search_deadline_ms(std::ptr::null()), -1);
        let result = catalog_search_visible(std::ptr::null());
        assert_eq!(unsafe { &*result }.error_code, FfiErrorCode::NullArg);
        catalog_free_result(result);
    }

    #[test]
    fn free_functions_accept_null() {
        catalog_free_request(std::ptr::null_mut());
        catalog_free_result(std::ptr::null_mut());
        catalog_free_string(std::ptr::null_mut());
    }
}
