//! HTTP transport seam for the backend REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with a request
//! timeout. Native: the browser client is an inert stub; tests drive the
//! auth flows through a mock [`HttpClient`] instead.
//!
//! ERROR HANDLING
//! ==============
//! Transport problems, timeouts, and undecodable bodies are distinct
//! `ApiError` variants so callers can show a retryable generic message for
//! transport failures while surfacing backend rejection messages verbatim.

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

/// HTTP verbs used by the auth API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// Raw response handed back by the transport; decoding happens in callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// True for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("unexpected response ({status})")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unsupported,
}

/// Transport interface the session service talks through.
///
/// Implementations send `body` as JSON when present and attach `bearer` as
/// an `Authorization: Bearer` header when present. They report transport
/// failures only; non-2xx statuses come back as ordinary responses.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&serde_json::Value>,
        bearer: Option<&str>,
    ) -> Result<HttpResponse, ApiError>;
}

/// API configuration for the browser client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix for backend auth endpoints (`/auth/...` is appended).
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api/v1".to_owned(),
            timeout_ms: 30_000,
        }
    }
}

/// Browser HTTP client backed by `gloo-net`. Requires a browser
/// environment; every request fails with `ApiError::Unsupported` natively.
#[derive(Clone, Debug)]
pub struct GlooClient {
    timeout_ms: u32,
}

impl GlooClient {
    #[must_use]
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }

    /// Configured per-request timeout.
    #[must_use]
    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    #[cfg(feature = "hydrate")]
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&serde_json::Value>,
        bearer: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        use futures::future::{Either, select};

        let request = Box::pin(async move {
            let mut builder = match method {
                HttpMethod::Get => gloo_net::http::Request::get(path),
                HttpMethod::Post => gloo_net::http::Request::post(path),
                HttpMethod::Delete => gloo_net::http::Request::delete(path),
            };
            if let Some(token) = bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let request = match body {
                Some(value) => builder.json(value).map_err(|e| ApiError::Network(e.to_string()))?,
                None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
            };
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            Ok(HttpResponse { status, body: text })
        });
        let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(self.timeout_ms));

        match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(ApiError::Timeout(self.timeout_ms)),
        }
    }
}

impl Default for GlooClient {
    fn default() -> Self {
        Self::new(ApiConfig::default().timeout_ms)
    }
}

impl HttpClient for GlooClient {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&serde_json::Value>,
        bearer: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.send(method, path, body, bearer).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, body, bearer);
            Err(ApiError::Unsupported)
        }
    }
}
