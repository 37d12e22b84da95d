//! `zypox://` scheme handler
//!
//! Generated homepages never touch the disk; the handler answers with the
//! document the owning tab currently holds.

use tauri::http::{header, HeaderValue, Request, Response, StatusCode};
use tauri::{AppHandle, Manager};

use crate::state::AppState;

pub fn serve(app: &AppHandle, request: &Request<Vec<u8>>) -> Response<Vec<u8>> {
    let location = request.uri().to_string();

    let document = app
        .try_state::<AppState>()
        .and_then(|state| {
            state
                .with_browser(|browser| Ok(browser.homepage_document(&location)))
                .ok()
                .flatten()
        });

    match document {
        Some(html) => html_response(StatusCode::OK, html.into_bytes()),
        None => {
            tracing::debug!(location = %location, "No homepage at location");
            html_response(StatusCode::NOT_FOUND, Vec::new())
        }
    }
}

fn html_response(status: StatusCode, body: Vec<u8>) -> Response<Vec<u8>> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}
