//! Data models module
//!
//! Backend-supplied records rendered by the pages, plus the one payload the
//! client originates (the registration request). All wire shapes follow the
//! Mutuals backend JSON API.

pub mod event;
pub mod interest;
pub mod user;

pub use event::Event;
pub use interest::Interest;
pub use user::{
    CreateUserRequest, CreatedUser, Gender, GroupRef, LoginRequest, SubgroupMember, SubgroupRef,
    UserProfile,
};

use serde::{Deserialize, Deserializer};

/// The backend emits opaque ids sometimes as JSON strings and sometimes as
/// numbers (the interest catalog uses numeric primary keys, user-detail
/// stringifies them). Normalize both to strings.
pub(crate) fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Text(String),
        Number(i64),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(s) => s,
        IdRepr::Number(n) => n.to_string(),
    })
}
