// API client module: a small blocking client for the 42 intranet REST API.
//
// - `client`: request construction, transport hand-off, low-level verbs.
// - `body`: request body encodings (none, raw, JSON, multipart upload).
// - `classify`: rate-limit detection and status classification.
// - `users`, `closes`, `projects`: resource operations.
// - `pagination`: lazy page-number pagination.
// - `models`: DTOs decoded from and encoded to the API.

pub mod body;
pub mod classify;
pub mod client;
mod closes;
pub mod error;
pub mod models;
pub mod pagination;
mod projects;
mod users;

pub use body::{Body, Upload};
pub use classify::{RateLimitPolicy, HOURLY_REMAINING, SECONDLY_REMAINING};
pub use client::ApiClient;
pub use error::{ApiError, Subject};
pub use models::{Close, Project, ProjectUser, User, UserPatch, UserRef};
pub use pagination::{Items, Pages};
pub use projects::ProjectsQuery;
pub use users::USER_IMAGE_FIELD;
