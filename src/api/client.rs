// The intranet API client: request construction, transport hand-off and
// response classification.
// - `ApiClient` holds the base endpoint, an already-authenticated transport
//   and the rate-limit policy. It has no mutable state and is cheap to clone.
// - Authorization, timeouts and connection pooling belong to the transport
//   the caller passes in.

use std::io::Read;

use reqwest::blocking::{Client, Request, Response};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::body::Body;
use super::classify::{classify, Expectation, RateLimitPolicy};
use super::error::ApiError;

/// Blocking client for the intranet REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    endpoint: String,
    http: Client,
    rate_limits: RateLimitPolicy,
}

impl ApiClient {
    /// Create a client for `endpoint` using a transport that already attaches
    /// authorization to every request.
    pub fn new(endpoint: &str, http: Client) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http,
            rate_limits: RateLimitPolicy::default(),
        }
    }

    pub fn with_rate_limits(mut self, policy: RateLimitPolicy) -> Self {
        self.rate_limits = policy;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn rate_limits(&self) -> &RateLimitPolicy {
        &self.rate_limits
    }

    /// Build a request for `path` (relative to the endpoint) without sending it.
    /// The path is used as written.
    pub fn prepare(&self, method: Method, path: &str, body: Body) -> Result<Request, ApiError> {
        let url = format!("{}{}", self.endpoint, path);
        let url = Url::parse(&url)
            .map_err(|e| ApiError::Encoding(format!("invalid request url {url}: {e}")))?;
        self.build(method, url, &[], body)
    }

    /// Build a request for a resource below the endpoint. Each segment is
    /// percent-encoded, so a login or slug can never reach into the query or
    /// another path.
    pub fn prepare_resource(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(String, String)],
        body: Body,
    ) -> Result<Request, ApiError> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| {
            ApiError::Encoding(format!("invalid endpoint {}: {e}", self.endpoint))
        })?;
        url.path_segments_mut()
            .map_err(|()| ApiError::Encoding(format!("endpoint {} has no path", self.endpoint)))?
            .pop_if_empty()
            .extend(segments);
        self.build(method, url, query, body)
    }

    fn build(
        &self,
        method: Method,
        url: Url,
        query: &[(String, String)],
        body: Body,
    ) -> Result<Request, ApiError> {
        let target = url.to_string();
        let mut builder = self.http.request(method, url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        body.apply(builder)
            .build()
            .map_err(|e| ApiError::Encoding(format!("building request for {target}: {e}")))
    }

    fn execute(&self, request: Request) -> Result<Response, ApiError> {
        debug!(method = %request.method(), path = request.url().path(), "sending request");
        let response = self.http.execute(request)?;
        debug!(status = response.status().as_u16(), "received response");
        Ok(response)
    }

    /// Send a request, applying only the rate-limit check.
    fn send(&self, request: Request) -> Result<Response, ApiError> {
        let response = self.execute(request)?;
        self.rate_limits.check(response.headers())?;
        Ok(response)
    }

    /// Send a request and classify the response for an operation.
    pub(crate) fn exchange(
        &self,
        request: Request,
        expect: Expectation,
    ) -> Result<Response, ApiError> {
        let response = self.execute(request)?;
        classify(response.status(), response.headers(), &self.rate_limits, expect)?;
        Ok(response)
    }

    /// Send a GET. Only the rate limit is checked; the status is the caller's.
    pub fn get(&self, path: &str) -> Result<Response, ApiError> {
        self.send(self.prepare(Method::GET, path, Body::Empty)?)
    }

    pub fn delete(&self, path: &str) -> Result<Response, ApiError> {
        self.send(self.prepare(Method::DELETE, path, Body::Empty)?)
    }

    /// Send a POST with a raw body read from `body`.
    pub fn post(
        &self,
        path: &str,
        content_type: &str,
        body: impl Read,
    ) -> Result<Response, ApiError> {
        self.send(self.prepare(Method::POST, path, Body::raw(content_type, body)?)?)
    }

    /// Send a PATCH with a raw body read from `body`.
    pub fn patch(
        &self,
        path: &str,
        content_type: &str,
        body: impl Read,
    ) -> Result<Response, ApiError> {
        self.send(self.prepare(Method::PATCH, path, Body::raw(content_type, body)?)?)
    }

    pub fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        value: &T,
    ) -> Result<Response, ApiError> {
        self.send(self.prepare(Method::POST, path, Body::json(value)?)?)
    }

    pub fn patch_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        value: &T,
    ) -> Result<Response, ApiError> {
        self.send(self.prepare(Method::PATCH, path, Body::json(value)?)?)
    }
}

/// Read a successful response body and decode it as JSON.
pub(crate) fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes()?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Lay the top-level fields of a server response over the caller's value.
///
/// Fields the server did not send, or sent as `null`, keep the caller's value.
pub(crate) fn overlay<T: Serialize + DeserializeOwned>(
    base: &T,
    server: serde_json::Value,
) -> Result<T, ApiError> {
    let mut merged =
        serde_json::to_value(base).map_err(|e| ApiError::Encoding(e.to_string()))?;
    if let (Some(target), serde_json::Value::Object(fields)) = (merged.as_object_mut(), server) {
        for (key, value) in fields {
            if !value.is_null() {
                target.insert(key, value);
            }
        }
    }
    Ok(serde_json::from_value(merged)?)
}
