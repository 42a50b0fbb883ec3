use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserRef;

/// A disciplinary or administrative close placed on a user.
///
/// `user` is the subject and `closer` the staff member placing it. Only their
/// `login` and `id` respectively are needed to create one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Close {
    pub id: u64,
    pub kind: String,
    pub reason: String,
    pub state: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub community_services: Vec<serde_json::Value>,
    pub user: UserRef,
    pub closer: UserRef,
}

/// The `{"close": {...}}` envelope sent to `POST /users/:login/closes`.
#[derive(Debug, Serialize)]
pub(crate) struct NewClose<'a> {
    pub close: NewCloseFields<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewCloseFields<'a> {
    pub closer_id: u64,
    pub kind: &'a str,
    pub reason: &'a str,
}

impl<'a> From<&'a Close> for NewClose<'a> {
    fn from(close: &'a Close) -> Self {
        NewClose {
            close: NewCloseFields {
                closer_id: close.closer.id,
                kind: &close.kind,
                reason: &close.reason,
            },
        }
    }
}
