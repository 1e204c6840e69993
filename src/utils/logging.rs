//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the mutuals-web application.

use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// The returned guard must be held for the lifetime of the process,
/// otherwise buffered log lines are lost on shutdown.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "mutuals-web.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log page views with structured data
pub fn log_page_view(route: &str, user_id: Option<&str>) {
    info!(route = route, user_id = user_id, "Page rendered");
}

/// Log backend API errors with context
pub fn log_backend_error(endpoint: &str, error: &str) {
    error!(endpoint = endpoint, error = error, "Backend API error");
}
