//! Mutuals backend API client
//!
//! This service wraps the external backend's HTTP/JSON endpoints: user
//! creation, login-by-id, the interest catalog, user detail, and recommended
//! events. It owns the HTTP client setup, response parsing, and the mapping
//! from transport failures to the backend error taxonomy.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::settings::Settings;
use crate::models::{CreateUserRequest, CreatedUser, Event, Interest, LoginRequest, UserProfile};
use crate::utils::errors::{BackendError, BackendResult, MutualsError, Result};

/// HTTP client for the Mutuals backend API
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new BackendClient instance
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.backend.timeout_seconds))
            .user_agent("MutualsWeb/1.0")
            .build()
            .map_err(MutualsError::Http)?;

        Ok(Self {
            client,
            base_url: settings.backend.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submit a new-user registration and return the assigned user id
    pub async fn create_user(&self, payload: &CreateUserRequest) -> BackendResult<String> {
        let url = format!("{}/api/users/", self.base_url);
        debug!(url = %url, "Creating user");

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(map_transport_error)?;

        let created: CreatedUser = parse_success(response, "user").await?;
        debug!(user_id = %created.user_id, "User created");
        Ok(created.user_id)
    }

    /// Check that a user id exists. The backend answers 200 for a known id
    /// and 404 otherwise; the response body is not used.
    pub async fn check_login(&self, user_id: &str) -> BackendResult<()> {
        let url = format!("{}/api/login/", self.base_url);
        debug!(user_id = %user_id, "Checking login");

        let payload = LoginRequest {
            user_id: user_id.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(map_transport_error)?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => {
                warn!(user_id = %user_id, "Login check: user not found");
                Err(BackendError::NotFound(format!("user {}", user_id)))
            }
            status => Err(request_failed(status, response).await),
        }
    }

    /// Fetch the interest catalog
    pub async fn list_interests(&self) -> BackendResult<Vec<Interest>> {
        let url = format!("{}/api/interests", self.base_url);
        debug!(url = %url, "Fetching interest catalog");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        parse_success(response, "interest catalog").await
    }

    /// Fetch the full profile for a user: fields, interests, group and
    /// subgroup labels, and the subgroup member roster
    pub async fn user_detail(&self, user_id: &str) -> BackendResult<UserProfile> {
        let url = format!("{}/api/user-detail/{}/", self.base_url, user_id);
        debug!(user_id = %user_id, "Fetching user detail");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            warn!(user_id = %user_id, "User detail: user not found");
            return Err(BackendError::NotFound(format!("user {}", user_id)));
        }

        parse_success(response, "user detail").await
    }

    /// Fetch the recommended events for a user
    pub async fn events_for_user(&self, user_id: &str) -> BackendResult<Vec<Event>> {
        let url = format!("{}/api/events/user/{}", self.base_url, user_id);
        debug!(user_id = %user_id, "Fetching recommended events");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            warn!(user_id = %user_id, "Events: user not found");
            return Err(BackendError::NotFound(format!("user {}", user_id)));
        }

        parse_success(response, "event list").await
    }
}

/// Map reqwest transport errors to the backend error taxonomy
fn map_transport_error(e: reqwest::Error) -> BackendError {
    if e.is_timeout() {
        BackendError::Timeout
    } else if e.is_connect() {
        BackendError::ServiceUnavailable
    } else {
        BackendError::RequestFailed(e.to_string())
    }
}

/// Parse a JSON body from a response expected to be 2xx
async fn parse_success<T: DeserializeOwned>(
    response: Response,
    what: &str,
) -> BackendResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(request_failed(status, response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| BackendError::InvalidResponse(format!("malformed {}: {}", what, e)))
}

async fn request_failed(status: StatusCode, response: Response) -> BackendError {
    let body = response.text().await.unwrap_or_default();
    BackendError::RequestFailed(format!("HTTP {}: {}", status, body))
}
