// User lifecycle and correction-point operations.

use reqwest::Method;
use serde::Serialize;

use super::body::{Body, Upload};
use super::classify::Expectation;
use super::client::{decode, overlay, ApiClient};
use super::error::{ApiError, Subject};
use super::models::{User, UserPatch};

/// Multipart field the API reads a new profile picture from.
pub const USER_IMAGE_FIELD: &str = "user[image]";

const FETCH_USER: Expectation = Expectation::new(Subject::User, "fetching user");
const CREATE_USER: Expectation = Expectation::new(Subject::User, "creating user");
const UPDATE_USER: Expectation = Expectation::new(Subject::User, "updating user");
const SET_IMAGE: Expectation = Expectation::new(Subject::User, "setting profile image");
const ADD_POINTS: Expectation = Expectation::new(Subject::User, "adding correction points");
const REMOVE_POINTS: Expectation = Expectation::new(Subject::User, "removing correction points");

#[derive(Serialize)]
struct Envelope<T> {
    user: T,
}

#[derive(Serialize)]
struct NewUser<'a> {
    campus_id: u64,
    email: &'a str,
    first_name: &'a str,
    kind: &'a str,
    last_name: &'a str,
    login: &'a str,
}

#[derive(Serialize)]
struct CorrectionPoints<'a> {
    amount: u32,
    reason: &'a str,
}

impl ApiClient {
    /// Create `user` on `campus_id`.
    ///
    /// Returns the caller's user with the server-assigned fields (`id`, `url`,
    /// ...) laid over it. `user` itself is left untouched.
    pub fn create_user(&self, user: &User, campus_id: u64) -> Result<User, ApiError> {
        let body = Body::json(&Envelope {
            user: NewUser {
                campus_id,
                email: &user.email,
                first_name: &user.first_name,
                kind: &user.kind,
                last_name: &user.last_name,
                login: &user.login,
            },
        })?;
        let request = self.prepare_resource(Method::POST, &["users"], &[], body)?;
        let created: serde_json::Value = decode(self.exchange(request, CREATE_USER)?)?;
        overlay(user, created)
    }

    /// Patch the fields set on `patch`; unset fields are not sent.
    pub fn update_user(&self, login: &str, patch: &UserPatch) -> Result<(), ApiError> {
        let body = Body::json(&Envelope { user: patch })?;
        let request = self.prepare_resource(Method::PATCH, &["users", login], &[], body)?;
        self.exchange(request, UPDATE_USER)?;
        Ok(())
    }

    /// Replace the profile picture of `login`.
    ///
    /// A 404 becomes `user not found`. Any other failure becomes
    /// `failed setting profile image`, whatever the server said.
    pub fn set_user_image(&self, login: &str, image: Upload) -> Result<(), ApiError> {
        let request = self.prepare_resource(
            Method::PATCH,
            &["users", login],
            &[],
            Body::multipart(USER_IMAGE_FIELD, image),
        )?;
        self.exchange(request, SET_IMAGE)?;
        Ok(())
    }

    pub fn get_user_by_login(&self, login: &str) -> Result<User, ApiError> {
        let request = self.prepare_resource(Method::GET, &["users", login], &[], Body::Empty)?;
        decode(self.exchange(request, FETCH_USER)?)
    }

    pub fn add_correction_points(
        &self,
        login: &str,
        amount: u32,
        reason: &str,
    ) -> Result<(), ApiError> {
        let body = Body::json(&CorrectionPoints { amount, reason })?;
        let path = ["users", login, "correction_points", "add"];
        let request = self.prepare_resource(Method::POST, &path, &[], body)?;
        self.exchange(request, ADD_POINTS)?;
        Ok(())
    }

    pub fn remove_correction_points(
        &self,
        login: &str,
        amount: u32,
        reason: &str,
    ) -> Result<(), ApiError> {
        let body = Body::json(&CorrectionPoints { amount, reason })?;
        let path = ["users", login, "correction_points", "remove"];
        let request = self.prepare_resource(Method::DELETE, &path, &[], body)?;
        self.exchange(request, REMOVE_POINTS)?;
        Ok(())
    }
}
