//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{MutualsError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_backend_config(&settings.backend)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate HTTP server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(MutualsError::Config("Server host is required".to_string()));
    }

    if config.port == 0 {
        return Err(MutualsError::Config(
            "Server port must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate backend API configuration
fn validate_backend_config(config: &super::BackendConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(MutualsError::Config(
            "Backend base URL is required".to_string(),
        ));
    }

    Url::parse(&config.base_url).map_err(|e| {
        MutualsError::Config(format!("Backend base URL is not a valid URL: {}", e))
    })?;

    if config.timeout_seconds == 0 {
        return Err(MutualsError::Config(
            "Backend timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(MutualsError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(MutualsError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
