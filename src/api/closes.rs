use reqwest::Method;

use super::body::Body;
use super::classify::Expectation;
use super::client::{decode, overlay, ApiClient};
use super::error::{ApiError, Subject};
use super::models::{Close, NewClose};

const CREATE_CLOSE: Expectation = Expectation::new(Subject::User, "creating close");

impl ApiClient {
    /// Place `close` on its subject user (`close.user.login`).
    ///
    /// Returns the caller's close with the server record (id, state,
    /// timestamps, user stubs) laid over it. Fails before sending anything if
    /// the subject has no login.
    pub fn create_close(&self, close: &Close) -> Result<Close, ApiError> {
        if close.user.login.is_empty() {
            return Err(ApiError::Encoding("close has no subject login".to_string()));
        }
        let body = Body::json(&NewClose::from(close))?;
        let path = ["users", close.user.login.as_str(), "closes"];
        let request = self.prepare_resource(Method::POST, &path, &[], body)?;
        let created: serde_json::Value = decode(self.exchange(request, CREATE_CLOSE)?)?;
        overlay(close, created)
    }
}
