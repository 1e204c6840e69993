//! Mock Mutuals backend for testing
//!
//! This module provides a mock HTTP server that simulates the Mutuals
//! backend API for testing purposes. It uses wiremock to create
//! configurable mock responses for every endpoint the front end consumes.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mutuals_web::config::Settings;
use mutuals_web::services::BackendClient;

use super::test_data;

/// Mock Mutuals backend server for testing
pub struct BackendMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub status: u16,
    pub delay_ms: Option<u64>,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            status: 200,
            delay_ms: None,
            custom_response: None,
        }
    }
}

impl MockResponseConfig {
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }
}

impl BackendMockServer {
    /// Create a new mock backend server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Settings pointing the application at this mock server. The short
    /// client timeout keeps the timeout tests fast.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.backend.base_url = self.server.uri();
        settings.backend.timeout_seconds = 1;
        settings
    }

    /// A backend client wired to this mock server
    pub fn client(&self) -> BackendClient {
        BackendClient::new(&self.settings()).expect("failed to build backend client")
    }

    fn template(config: &MockResponseConfig, default_body: Value) -> ResponseTemplate {
        let body = config.custom_response.clone().unwrap_or(default_body);
        let mut response = ResponseTemplate::new(config.status).set_body_json(body);
        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }
        response
    }

    /// Setup mock for `GET /api/interests`
    pub async fn mock_interests(&self, config: MockResponseConfig) {
        let response = Self::template(&config, test_data::interest_catalog());

        Mock::given(method("GET"))
            .and(path("/api/interests"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for `POST /api/users/`
    pub async fn mock_create_user(&self, config: MockResponseConfig) {
        let response = Self::template(&config, json!({"user_id": "M9999"}));

        Mock::given(method("POST"))
            .and(path("/api/users/"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for `POST /api/login/`
    pub async fn mock_login(&self, config: MockResponseConfig) {
        let response = Self::template(&config, json!({"message": "Login successful"}));

        Mock::given(method("POST"))
            .and(path("/api/login/"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for `GET /api/user-detail/{user_id}/`
    pub async fn mock_user_detail(&self, user_id: &str, config: MockResponseConfig) {
        let response = Self::template(&config, test_data::user_profile(user_id));

        Mock::given(method("GET"))
            .and(path(format!("/api/user-detail/{}/", user_id)))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for `GET /api/events/user/{user_id}`
    pub async fn mock_events(&self, user_id: &str, config: MockResponseConfig) {
        let response = Self::template(&config, test_data::recommended_events());

        Mock::given(method("GET"))
            .and(path(format!("/api/events/user/{}", user_id)))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }
}
