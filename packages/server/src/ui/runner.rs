//! Server startup.

use std::{io, sync::Arc};

use thiserror::Error;
use tokio::net::TcpListener;

use crate::{
    config::ServerConfig,
    domain::{RepositoryError, UserRepository},
    infrastructure::repository::{InMemoryChatRepository, InMemoryUserRepository},
};

use super::{router::build_router, signal::shutdown_signal, state::AppState};

/// Errors that abort server startup or serving
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to seed users: {0}")]
    Seed(#[from] RepositoryError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Build the in-memory stores and seed the configured users.
pub async fn build_state(config: &ServerConfig) -> Result<Arc<AppState>, ServerError> {
    let users = Arc::new(InMemoryUserRepository::new());
    for user in &config.users {
        users.insert(user.clone()).await?;
    }
    tracing::info!("Seeded {} users", users.count().await);

    let chats = Arc::new(InMemoryChatRepository::new());
    Ok(Arc::new(AppState::new(users, chats)))
}

/// Run the server until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let state = build_state(&config).await?;
    let app = build_router(state);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
