//! User models
//!
//! The profile shape returned by the user-detail endpoint, and the request
//! payloads for user creation and login.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Interest;

/// Full user profile as returned by `GET /api/user-detail/{user_id}/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(deserialize_with = "super::opaque_id")]
    pub id: String,
    pub name: String,
    pub age: u32,
    pub city: String,
    pub occupation: String,
    #[serde(default)]
    pub interests: Vec<Interest>,
    pub group: GroupRef,
    pub subgroup: SubgroupRef,
    #[serde(rename = "subgroupMembers", default)]
    pub subgroup_members: Vec<SubgroupMember>,
}

/// Backend-assigned group; name is null until the user has been matched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRef {
    pub name: Option<String>,
}

/// Backend-assigned subgroup within a group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubgroupRef {
    pub name: Option<String>,
}

/// Another user sharing the same subgroup, shown on the dashboard roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubgroupMember {
    #[serde(deserialize_with = "super::opaque_id")]
    pub id: String,
    pub name: String,
    pub age: u32,
    pub occupation: String,
}

/// Gender as enumerated by the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parse the registration form's select value
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// Payload for `POST /api/users/`
///
/// `dob` serializes as `YYYY-MM-DD`; `interest_ids` is guaranteed non-empty
/// by form validation before this struct is ever built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub gender: Gender,
    pub dob: NaiveDate,
    pub city: String,
    pub occupation: String,
    pub budget: f64,
    pub interest_ids: Vec<String>,
}

/// Create-user response body; only the assigned identifier is consumed
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedUser {
    #[serde(deserialize_with = "super::opaque_id")]
    pub user_id: String,
}

/// Payload for `POST /api/login/`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub user_id: String,
}
