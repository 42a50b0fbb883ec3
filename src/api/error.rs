// Error taxonomy for the intranet API client.
// - `RateLimited`: wait and call again.
// - `NotFound`: the operation's subject does not exist.
// - `OperationFailed`: any other refusal. Raw statuses and server error
//   bodies are not exposed.

use std::fmt;

use thiserror::Error;

/// The kind of resource an operation was acting on, used in `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    User,
    Project,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Subject::User => "user",
            Subject::Project => "project",
        };
        f.write_str(name)
    }
}

/// Errors returned by `ApiClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A remaining-quota header reported zero calls left.
    #[error("exceeded rate limit")]
    RateLimited { header: String },

    /// The server returned 404 for the operation's subject.
    #[error("{0} not found")]
    NotFound(Subject),

    /// Any other non-2xx status. `action` names what was being attempted.
    #[error("failed {action}")]
    OperationFailed { action: &'static str },

    /// The request body could not be built. Raised before any I/O.
    #[error("encoding failed: {0}")]
    Encoding(String),

    /// A successful response body did not match the expected shape.
    #[error("decoding failed: {0}")]
    Decoding(#[from] serde_json::Error),
}

impl ApiError {
    /// True when waiting and calling again may succeed.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ApiError::RateLimited { .. })
    }
}
