//! The C ABI driven the way a native host would, against the live mock
//! server: build the request, execute it over HTTP, hand the response back.

use std::ffi::{CStr, CString};
use std::net::SocketAddr;
use std::os::raw::c_char;

use catalog_ffi::types::{
    FfiCatalogResult, FfiDataTag, FfiErrorCode, FfiHttpRequest, FfiHttpResponse, FfiMovieList,
    FfiSearchAction,
};
use catalog_ffi::*;

const TOKEN: &str = "ffi-token";

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, TOKEN).await
        })
        .unwrap();
    });

    addr
}

fn read(s: *const c_char) -> String {
    unsafe { CStr::from_ptr(s) }.to_str().unwrap().to_string()
}

/// Execute a request built by the library, the way a host HTTP stack would.
fn execute(req: &FfiHttpRequest) -> (u16, CString) {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut builder = agent.get(read(req.url));
    let headers = unsafe { std::slice::from_raw_parts(req.headers, req.headers_len as usize) };
    for header in headers {
        builder = builder.header(read(header.key), read(header.value));
    }
    let mut response = builder.call().expect("HTTP transport error");
    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();
    (status, CString::new(body).unwrap())
}

fn titles(result: *mut FfiCatalogResult) -> Vec<String> {
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

fn new_client(addr: SocketAddr, token: &str) -> *mut catalog_ffi::types::FfiCatalogClient {
    let url = CString::new(format!("http://{addr}")).unwrap();
    let token = CString::new(token).unwrap();
    let lang = CString::new("es-ES").unwrap();
    catalog_client_new(url.as_ptr(), token.as_ptr(), lang.as_ptr())
}

#[test]
fn host_fetches_and_searches_through_c_abi() {
    let addr = start_server();
    let client = new_client(addr, TOKEN);
    let search = catalog_search_new(500, false);

    let req = catalog_build_top_rated(client);
    let (status, body) = execute(unsafe { &*req });
    catalog_free_request(req);
    assert_eq!(status, 200);

    let resp = FfiHttpResponse {
        status,
        body: body.as_ptr(),
    };
    let loaded = catalog_search_apply_response(search, client, &resp);
    assert_eq!(titles(loaded).len(), mock_server::fixture().len());
    catalog_free_result(loaded);

    let query = CString::new("DUNE").unwrap();
    assert!(catalog_search_set_query(search, query.as_ptr(), 0));
    assert_eq!(catalog_search_poll(search, 499), FfiSearchAction::None);
    assert_eq!(catalog_search_poll(search, 500), FfiSearchAction::Filtered);

    let visible = catalog_search_visible(search);
    assert_eq!(titles(visible), vec!["Dune: Parte dos", "Dune"]);
    catalog_free_result(visible);

    catalog_search_free(search);
    catalog_client_free(client);
}

#[test]
fn host_sees_unauthorized_status() {
    let addr = start_server();
    let client = new_client(addr, "stolen");

    let req = catalog_build_top_rated(client);
    let (status, body) = execute(unsafe { &*req });
    catalog_free_request(req);

    let resp = FfiHttpResponse {
        status,
        body: body.as_ptr(),
    };
    let result = catalog_parse_top_rated(client, &resp);
    let result_ref = unsafe { &*result };
    assert_eq!(result_ref.error_code, FfiErrorCode::HttpStatus);
    assert_eq!(result_ref.http_status, 401);
    assert!(read(result_ref.error_message).contains("Invalid API key"));

    catalog_free_result(result);
    catalog_client_free(client);
}
