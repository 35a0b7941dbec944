//! Session resolution middleware.
//!
//! Carts are per-session, keyed by the `x-session-id` header (a UUID). A
//! missing or malformed header gets a freshly minted id; the resolved id is
//! always echoed back on the response so clients can persist it.

use axum::{
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};

use closet_core::SessionId;

use crate::context::SessionContext;

pub const SESSION_HEADER: &str = "x-session-id";

pub async fn session_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let session_id = extract_session_id(req.headers()).unwrap_or_else(|| {
        let minted = SessionId::new();
        tracing::debug!(session_id = %minted, "minted new session");
        minted
    });

    req.extensions_mut().insert(SessionContext::new(session_id));

    let mut res = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&session_id.to_string()) {
        res.headers_mut().insert(SESSION_HEADER, value);
    }
    res
}

fn extract_session_id(headers: &HeaderMap) -> Option<SessionId> {
    let header = headers.get(SESSION_HEADER)?;
    let header = header.to_str().ok()?;
    header.trim().parse().ok()
}
