#![allow(dead_code)]

// Shared helpers for integration tests.
//
// These helpers intentionally use `tower_cookies::Cookie` parsing/encoding to match what the
// middleware emits in `Set-Cookie` and what browsers send back in `Cookie`.
use std::convert::Infallible;

use axum::body::Body;
use http::{HeaderMap, Request, Response, header};
use http_body_util::BodyExt as _;
use time::OffsetDateTime;
use tower_cookies::Cookie;
use tower_prefixed_sessions::{Session, SessionConfig, SessionManagerLayer};

pub async fn body_string(body: Body) -> String {
    // Collect an Axum body into a UTF-8 string for assertions.
    let bytes = body
        .collect()
        .await
        .expect("body collects successfully")
        .to_bytes();
    String::from_utf8_lossy(&bytes).into_owned()
}

pub fn session(req: &Request<Body>) -> Session {
    // Fetch the session handle the layer inserted into request extensions.
    req.extensions()
        .get::<Session>()
        .cloned()
        .expect("request includes Session extension")
}

pub async fn handler(req: Request<Body>) -> Result<Response<Body>, Infallible> {
    // Basic handler used by many tests: write a single key into the session.
    session(&req).insert("foo", 42).expect("session insert succeeds");

    Ok(Response::new(Body::empty()))
}

pub async fn noop_handler(_: Request<Body>) -> Result<Response<Body>, Infallible> {
    // Handler that does not access the session at all.
    Ok(Response::new(Body::empty()))
}

pub fn make_layer(config: SessionConfig) -> SessionManagerLayer {
    SessionManagerLayer::new().with_config(config)
}

pub fn set_cookies(res: &Response<Body>) -> Vec<Cookie<'static>> {
    // Parse every `Set-Cookie` header into a `Cookie` structure.
    set_cookies_from_headers(res.headers())
}

pub fn set_cookies_from_headers(headers: &HeaderMap) -> Vec<Cookie<'static>> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| {
            let value = value.to_str().expect("set-cookie header is valid utf-8");
            Cookie::parse_encoded(value)
                .expect("set-cookie parses successfully")
                .into_owned()
        })
        .collect()
}

pub fn get_session_cookie(res: &Response<Body>, name: &str) -> Cookie<'static> {
    // Convenience: parse the named session cookie from a response.
    set_cookies(res)
        .into_iter()
        .find(|cookie| cookie.name() == name)
        .expect("response includes named set-cookie header")
}

pub fn cookie_header_value(cookie: &Cookie<'_>) -> String {
    // Encode a cookie for use in a `Cookie` request header.
    cookie.encoded().to_string()
}

pub fn is_removal(cookie: &Cookie<'_>) -> bool {
    // A removal cookie carries an empty value and an expiry that is already in the past.
    let expired = cookie
        .expires_datetime()
        .is_some_and(|expires| expires <= OffsetDateTime::now_utc());
    let zero_max_age = cookie.max_age().is_some_and(|max_age| max_age.is_zero());
    cookie.value().is_empty() && (expired || zero_max_age)
}
