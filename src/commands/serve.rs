//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::{Config, StorageBackend};
use crate::domain::Credentials;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::Services;

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    let credentials = Credentials::new(config.auth_username.clone(), config.auth_password())?;
    let storage = args.storage.unwrap_or(config.storage);

    let app_state = match storage {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, users are lost on shutdown");
            AppState::from_services(&Services::in_memory(credentials))
        }
        StorageBackend::Sql => {
            let db = Arc::new(Database::connect(&config.database_url).await?);
            let services = Services::from_connection(db.get_connection(), credentials);
            AppState::from_services(&services).with_database(db)
        }
    }
    .with_cors_origin(config.cors_allowed_origin.clone());

    let app = create_router(app_state);

    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!(%storage, "Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
