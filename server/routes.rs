use std::io::Cursor;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::config::ServerConfig;
use crate::handlers;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn cors_header(cfg: &ServerConfig) -> Header {
    Header::from_bytes(b"Access-Control-Allow-Origin", cfg.allowed_origin.as_bytes())
        .expect("static header")
}

pub fn json_response(
    status: u16,
    body: String,
    cfg: &ServerConfig,
) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(status),
        vec![
            Header::from_bytes(b"Content-Type", b"application/json").unwrap(),
            cors_header(cfg),
        ],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn text_response(body: &str, cfg: &ServerConfig) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.as_bytes().to_vec();
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![
            Header::from_bytes(b"Content-Type", b"text/plain; charset=utf-8").unwrap(),
            cors_header(cfg),
        ],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

/// CORS preflight: no body, just the allow headers.
pub fn preflight(cfg: &ServerConfig) -> Response<Cursor<Vec<u8>>> {
    Response::new(
        StatusCode(204),
        vec![
            cors_header(cfg),
            Header::from_bytes(b"Access-Control-Allow-Methods", b"GET, POST, OPTIONS").unwrap(),
            Header::from_bytes(b"Access-Control-Allow-Headers", b"Content-Type").unwrap(),
        ],
        Cursor::new(Vec::new()),
        Some(0),
        None,
    )
}

pub fn not_found(cfg: &ServerConfig) -> Response<Cursor<Vec<u8>>> {
    json_response(404, r#"{"error":"Not Found"}"#.to_owned(), cfg)
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches one incoming request.
///
/// Handlers receive a `&mut Request` so the dispatcher retains ownership
/// and performs the final `respond` call itself.
pub fn dispatch(mut request: Request, cfg: &ServerConfig) {
    let method = request.method().clone();
    let url = request.url().to_owned();

    let path = match url.find('?') {
        Some(pos) => url[..pos].to_owned(),
        None => url,
    };

    let response = match (method, path.as_str()) {
        (Method::Get, "/") => text_response("Land Cover Classifier Backend is Running!", cfg),
        (Method::Post, "/classify") => handlers::classify::handle(&mut request, cfg),
        (Method::Options, _) => preflight(cfg),
        _ => not_found(cfg),
    };

    let _ = request.respond(response);
}
