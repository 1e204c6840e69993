//! HTTP route handlers
//!
//! One submodule per screen. Handlers run the page controllers against the
//! backend client held in the shared application context and turn the
//! resulting state into a rendered page or a redirect. Backend failures are
//! caught here and rendered as page-level notices; they never escape as
//! bare 500s.

use axum::routing::get;
use axum::Router;

use crate::config::Settings;
use crate::services::BackendClient;

pub mod dashboard;
pub mod login;
pub mod register;
pub mod welcome;

/// Application-wide context shared by all handlers
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub backend: BackendClient,
}

impl AppContext {
    pub fn new(settings: Settings, backend: BackendClient) -> Self {
        Self { settings, backend }
    }
}

/// Build the application router with all client-visible routes
pub fn router(context: AppContext) -> Router {
    Router::new()
        .route("/", get(welcome::show))
        .route("/register", get(register::show).post(register::submit))
        .route("/login", get(login::show).post(login::submit))
        .route("/dashboard/:user_id", get(dashboard::show))
        .with_state(context)
}
