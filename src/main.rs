//! mutuals-web server
//!
//! Main application entry point

use tracing::info;

use mutuals_web::{
    config::Settings,
    handlers::{self, AppContext},
    services::BackendClient,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the file appender on shutdown
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting mutuals-web front end...");
    info!(backend = %settings.backend.base_url, "Using Mutuals backend");

    // Initialize the backend API client
    let backend = BackendClient::new(&settings)?;

    // Build the router with the shared application context
    let context = AppContext::new(settings.clone(), backend);
    let app = handlers::router(context);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("mutuals-web is listening on {}", addr);

    axum::serve(listener, app).await?;

    info!("mutuals-web has been shut down.");

    Ok(())
}
