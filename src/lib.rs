//! mutuals-web
//!
//! Server-rendered web front end for the Mutuals matchmaking backend. This
//! library provides the page controllers (registration, login, dashboard),
//! the backend API client, and the HTTP handlers that tie them together.
//! All business logic lives in the external backend; this crate renders
//! what it receives and posts what the user enters.

pub mod config;
pub mod controllers;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;
pub mod views;

// Re-export commonly used types
pub use config::Settings;
pub use handlers::AppContext;
pub use services::BackendClient;
pub use utils::errors::{BackendError, MutualsError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
