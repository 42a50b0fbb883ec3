// Turns a completed response into success or one of the `ApiError` kinds.

use reqwest::header::{HeaderMap, HeaderName};
use reqwest::StatusCode;
use tracing::warn;

use super::error::{ApiError, Subject};

pub const HOURLY_REMAINING: &str = "x-hourly-ratelimit-remaining";
pub const SECONDLY_REMAINING: &str = "x-secondly-ratelimit-remaining";

/// The remaining-quota headers that signal an exhausted rate limit when
/// they read `"0"`.
///
/// Only the hourly header is checked by default. The API also sends a
/// per-second header; whether it should abort a call is a deployment choice,
/// so it is opt-in through [`RateLimitPolicy::with_header`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitPolicy {
    headers: Vec<HeaderName>,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            headers: vec![HeaderName::from_static(HOURLY_REMAINING)],
        }
    }
}

impl RateLimitPolicy {
    /// A policy that checks exactly the given headers.
    pub fn new(headers: impl IntoIterator<Item = HeaderName>) -> Self {
        Self {
            headers: headers.into_iter().collect(),
        }
    }

    pub fn with_header(mut self, header: HeaderName) -> Self {
        if !self.headers.contains(&header) {
            self.headers.push(header);
        }
        self
    }

    pub fn headers(&self) -> &[HeaderName] {
        &self.headers
    }

    /// Fail with `RateLimited` if any watched header reads zero.
    pub fn check(&self, headers: &HeaderMap) -> Result<(), ApiError> {
        for name in &self.headers {
            let exhausted = headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.trim() == "0");
            if exhausted {
                warn!(header = %name, "rate limit exhausted");
                return Err(ApiError::RateLimited {
                    header: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// What an operation reports when the server refuses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expectation {
    pub subject: Subject,
    pub action: &'static str,
}

impl Expectation {
    pub const fn new(subject: Subject, action: &'static str) -> Self {
        Self { subject, action }
    }
}

/// Classify a response. The quota check runs before the status check: the
/// API can report exhaustion on responses that are otherwise 2xx.
pub fn classify(
    status: StatusCode,
    headers: &HeaderMap,
    policy: &RateLimitPolicy,
    expect: Expectation,
) -> Result<(), ApiError> {
    policy.check(headers)?;
    if status.is_success() {
        return Ok(());
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(expect.subject));
    }
    Err(ApiError::OperationFailed { action: expect.action })
}
