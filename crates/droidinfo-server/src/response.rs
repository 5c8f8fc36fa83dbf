//! Response construction
//!
//! Every JSON response uses the Appium envelope `{"sessionId": .., "value": ..}`.
//! Failures put a W3C-style error object in `value`.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Response, StatusCode};
use serde_json::{json, Value};

pub type Body = Full<Bytes>;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Error code for failures while building a payload
pub const UNKNOWN_ERROR: &str = "unknown error";
/// Error code for paths that match no route
pub const UNKNOWN_COMMAND: &str = "unknown command";
/// Error code for known paths requested with the wrong method
pub const UNKNOWN_METHOD: &str = "unknown method";

fn with_body(
    status: StatusCode,
    content_type: &'static str,
    body: impl Into<Bytes>,
) -> Response<Body> {
    let mut response = Response::new(Full::new(body.into()));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

fn envelope(status: StatusCode, session_id: Option<&str>, value: Value) -> Response<Body> {
    let body = json!({
        "sessionId": session_id,
        "value": value,
    });
    with_body(status, JSON_CONTENT_TYPE, body.to_string())
}

/// 200 response carrying `value`
pub fn success(session_id: &str, value: Value) -> Response<Body> {
    envelope(StatusCode::OK, Some(session_id), value)
}

/// Error response with the given status and W3C error code
pub fn error(
    status: StatusCode,
    session_id: Option<&str>,
    code: &str,
    message: &str,
) -> Response<Body> {
    envelope(
        status,
        session_id,
        json!({
            "error": code,
            "message": message,
            "stacktrace": "",
        }),
    )
}

/// Prometheus text exposition
pub fn metrics(body: String) -> Response<Body> {
    with_body(StatusCode::OK, METRICS_CONTENT_TYPE, body)
}
