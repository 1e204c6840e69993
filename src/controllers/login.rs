//! Login page controller
//!
//! A single required identifier field. Submission asks the backend whether
//! the id exists; this is closer to "does this ID exist" than
//! authentication, so success is purely the backend's status code.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub user_id: String,
}

impl LoginForm {
    /// Validate the identifier; returns the trimmed id on success
    pub fn validate(&self) -> Result<&str, String> {
        let user_id = self.user_id.trim();
        if user_id.is_empty() {
            Err("User ID is required".to_string())
        } else {
            Ok(user_id)
        }
    }
}
