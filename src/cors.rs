//! CORS response filter.
//!
//! Adds CORS headers to every response whose request came from an
//! allow-listed origin. A header the handler already set is never
//! overwritten or duplicated. Preflight `OPTIONS` requests from listed
//! origins are answered directly with `204 No Content`.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;

/// Methods advertised to allowed origins
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Request headers advertised to allowed origins
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization, X-User-Id, X-Requested-With";

/// Fixed allow-list of origins.
#[derive(Debug, Clone, Default)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
}

impl CorsPolicy {
    /// Policy allowing exactly `origins`.
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive match against the allow-list.
    #[must_use]
    pub fn allows(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }

    /// Returns the request origin when it is allowed.
    fn allowed_origin<'a>(&self, request_headers: &'a HeaderMap) -> Option<&'a HeaderValue> {
        request_headers
            .get(header::ORIGIN)
            .filter(|origin| origin.to_str().is_ok_and(|o| self.allows(o)))
    }

    /// Adds the CORS headers for `origin`, keeping any already present.
    pub fn apply(&self, origin: &HeaderValue, headers: &mut HeaderMap) {
        headers
            .entry(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .or_insert_with(|| origin.clone());
        headers
            .entry(header::ACCESS_CONTROL_ALLOW_METHODS)
            .or_insert(HeaderValue::from_static(ALLOW_METHODS));
        headers
            .entry(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .or_insert(HeaderValue::from_static(ALLOW_HEADERS));
        headers
            .entry(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .or_insert(HeaderValue::from_static("true"));
        headers
            .entry(header::VARY)
            .or_insert(HeaderValue::from_static("Origin"));
    }
}

/// Middleware applying [`CorsPolicy`] to every response.
pub async fn cors_filter(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = policy.allowed_origin(request.headers()).cloned();
    let Some(origin) = origin else {
        return next.run(request).await;
    };

    let mut response = if request.method() == Method::OPTIONS {
        debug!(?origin, "Answering CORS preflight");
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };
    policy.apply(&origin, response.headers_mut());
    response
}
