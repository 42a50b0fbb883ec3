use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile as returned by `GET /users/:login`.
///
/// Every field defaults when absent, so the same type decodes both full
/// profiles and the short records returned by create calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub usual_first_name: Option<String>,
    pub usual_full_name: Option<String>,
    pub displayname: String,
    pub url: String,
    /// `"hidden"` when the user chose not to share it.
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub kind: String,
    #[serde(rename = "staff?")]
    pub is_staff: bool,
    pub correction_point: i64,
    pub pool_month: Option<String>,
    pub pool_year: Option<String>,
    pub location: Option<String>,
    pub wallet: i64,
    pub cursus_users: Vec<CursusUser>,
    #[serde(rename = "campus")]
    pub campuses: Vec<Campus>,
    pub campus_users: Vec<CampusUser>,
}

impl User {
    /// The campus flagged primary in `campus_users`, if any.
    pub fn primary_campus(&self) -> Option<&Campus> {
        let primary = self.campus_users.iter().find(|cu| cu.is_primary)?;
        self.campuses.iter().find(|c| c.id == primary.campus_id)
    }
}

/// The `{id, login, url}` stub embedded in closes and teams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRef {
    pub id: u64,
    pub login: String,
    pub url: String,
}

/// Partial update for `PATCH /users/:login`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Campus {
    pub id: u64,
    pub name: String,
    pub time_zone: String,
    pub language: Language,
    pub users_count: u64,
    pub vogsphere_id: Option<u64>,
    pub country: String,
    pub address: String,
    pub zip: String,
    pub city: String,
    pub website: String,
    pub facebook: String,
    pub twitter: String,
    pub active: bool,
    pub email_extension: Option<String>,
    pub default_hidden_phone: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub id: u64,
    pub name: String,
    /// ISO 639-1 code, e.g. `fr`.
    pub identifier: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Links a user to a campus; at most one per user is primary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampusUser {
    pub id: u64,
    pub user_id: u64,
    pub campus_id: u64,
    pub is_primary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cursus {
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursusUser {
    pub id: u64,
    pub grade: Option<String>,
    pub level: f64,
    pub begin_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub blackholed_at: Option<DateTime<Utc>>,
    pub cursus_id: u64,
    pub has_coalition: bool,
    pub cursus: Cursus,
}
